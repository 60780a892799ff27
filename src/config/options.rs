// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Everything the three entry points need, resolved from constants.
/// No flags or environment variables feed into this.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub normalize: NormalizeOptions,
    pub dashboard: DashboardOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadinessOptions {
    /// Page counts as rendered once this many listing cards are present.
    pub min_items: usize,
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for ReadinessOptions {
    fn default() -> Self {
        Self {
            min_items: READY_MIN_ITEMS,
            timeout: Duration::from_secs(READY_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(READY_POLL_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    pub url: String,
    pub out_path: PathBuf,
    pub readiness: ReadinessOptions,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            url: s!(LISTING_URL),
            out_path: PathBuf::from(RAW_FILE),
            readiness: ReadinessOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub in_path: PathBuf,
    pub out_path: PathBuf,
    pub histogram_bins: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            in_path: PathBuf::from(RAW_FILE),
            out_path: PathBuf::from(CLEAN_FILE),
            histogram_bins: HISTOGRAM_BINS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardOptions {
    pub in_path: PathBuf,
    pub max_ram_gb: u32,
    pub default_brand_count: usize,
    pub histogram_bins: usize,
    pub word_limit: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            in_path: PathBuf::from(CLEAN_FILE),
            max_ram_gb: MAX_RAM_GB,
            default_brand_count: DEFAULT_BRAND_COUNT,
            histogram_bins: HISTOGRAM_BINS,
            word_limit: WORD_LIMIT,
        }
    }
}
