// src/extract.rs
//
// RAM / SSD capacity from free-text titles. A single left-to-right scan per
// field; the first match wins even when a title mentions several capacities
// (e.g. "8GB GDDR6" before the system RAM). That is observed behavior of the
// listings we read, kept as-is.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{CleanListing, Listing};

/// Below this, an SSD figure is read as terabytes ("1TB SSD", "2 TB SSD").
const TB_THRESHOLD: u32 = 10;
const GB_PER_TB: u32 = 1024;

fn ram_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*GB").expect("ram regex"))
}

fn ssd_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(?:GB|TB)\s*SSD").expect("ssd regex"))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capacity {
    pub ram_gb: Option<u32>,
    pub storage_gb: Option<u32>,
}

/// First integer followed by a GB marker.
pub fn extract_ram(title: &str) -> Option<u32> {
    let caps = ram_re().captures(title)?;
    caps[1].parse().ok()
}

/// First integer followed by GB/TB and then SSD, in gigabytes.
pub fn extract_storage(title: &str) -> Option<u32> {
    let caps = ssd_re().captures(title)?;
    let n: u32 = caps[1].parse().ok()?;
    if n < TB_THRESHOLD { n.checked_mul(GB_PER_TB) } else { Some(n) }
}

pub fn extract_capacity(title: &str) -> Capacity {
    Capacity {
        ram_gb: extract_ram(title),
        storage_gb: extract_storage(title),
    }
}

/// Attach capacities to a cleaned row.
pub fn enrich(clean: CleanListing) -> Listing {
    let Capacity { ram_gb, storage_gb } = extract_capacity(&clean.title);
    Listing { clean, ram_gb, storage_gb }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ram_and_gb_ssd() {
        let c = extract_capacity("Lenovo IdeaPad Slim 3 Intel Core i5 16GB RAM 512GB SSD 15.6\" FHD");
        assert_eq!(c, Capacity { ram_gb: Some(16), storage_gb: Some(512) });
    }

    #[test]
    fn tb_ssd_scales_to_gb() {
        let c = extract_capacity("Asus TUF Gaming 16GB RAM 1TB SSD RTX 4060");
        assert_eq!(c.storage_gb, Some(1024));
        assert_eq!(extract_storage("MSI 32 GB 2 tb ssd"), Some(2048));
    }

    #[test]
    fn spacing_and_case_are_tolerated() {
        assert_eq!(extract_ram("Dell Vostro 8 gb ram"), Some(8));
        assert_eq!(extract_storage("Dell Vostro 8 gb 256 Gb Ssd"), Some(256));
    }

    #[test]
    fn missing_ssd_capacity_is_none() {
        let c = extract_capacity("HP 250 G9 8GB 256GB eMMC");
        assert_eq!(c.ram_gb, Some(8));
        assert_eq!(c.storage_gb, None);
        assert_eq!(extract_capacity("Apple MacBook Air M2"), Capacity::default());
    }

    #[test]
    fn first_match_wins() {
        // VRAM appears before system RAM; the scan takes it.
        assert_eq!(extract_ram("Casper Excalibur RTX 4070 8GB 32GB RAM 1TB SSD"), Some(8));
        // HDD figure before the SSD one is skipped: it has no SSD marker.
        assert_eq!(extract_storage("Acer 8GB 1TB HDD 256GB SSD"), Some(256));
    }

    #[test]
    fn overflowing_digits_are_none() {
        assert_eq!(extract_ram("99999999999GB"), None);
    }

    #[test]
    fn enrich_keeps_clean_fields() {
        let clean = CleanListing {
            title: s!("Asus X 16GB 512GB SSD"),
            price_raw: s!("10.000,00 TL"),
            review_count_raw: s!("(5)"),
            price: Some(10000.0),
            review_count: 5,
            brand: s!("Asus"),
        };
        let l = enrich(clean.clone());
        assert_eq!(l.clean, clean);
        assert_eq!((l.ram_gb, l.storage_gb), (Some(16), Some(512)));
    }
}
