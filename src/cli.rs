// src/cli.rs
//
// Entry points for the two command-line stages. Neither takes flags or reads
// the environment: paths and timings come from `config`.

use crate::{
    analysis::{mean_price_by_brand, price_histogram, price_review_points},
    collect::{self, HttpPageSource},
    config::options::{AppOptions, NormalizeOptions},
    error::Result,
    model::{CleanListing, RawListing},
    normalize::clean_all,
    progress::{ConsoleProgress, Progress},
    report, table,
};

/// What the normalizer produced.
#[derive(Debug, PartialEq, Eq)]
pub struct NormalizeSummary {
    pub rows: usize,
    pub unpriced: usize,
}

/// Collector stage with default options and the HTTP page source.
pub fn collect() -> Result<()> {
    let opts = AppOptions::default().collect;
    let mut progress = ConsoleProgress::default();
    progress.log("--- STEP 1: COLLECTING LISTINGS ---");
    let mut source = HttpPageSource::new()?;
    collect::run(&opts, &mut source, &mut progress)?;
    Ok(())
}

/// Normalizer stage with default options.
pub fn normalize() -> Result<()> {
    let opts = AppOptions::default().normalize;
    let mut progress = ConsoleProgress::default();
    progress.log("--- STEP 2: CLEANING AND SUMMARY ---");
    normalize_with(&opts, &mut progress)?;
    Ok(())
}

/// Read raw, clean, write cleaned, print the three summaries.
/// The input file is checked before anything else happens.
pub fn normalize_with(opts: &NormalizeOptions, progress: &mut dyn Progress) -> Result<NormalizeSummary> {
    let raws: Vec<RawListing> = table::read_rows(&opts.in_path)?;
    progress.log(&format!("Loaded {} raw row(s) from '{}'.", raws.len(), opts.in_path.display()));
    progress.begin(raws.len());

    let cleaned: Vec<CleanListing> = clean_all(&raws);
    let unpriced = cleaned.iter().filter(|c| c.price.is_none()).count();
    if unpriced > 0 {
        progress.warn(&format!("{unpriced} row(s) have no readable price"));
        logw!("Normalize: {unpriced} unreadable price(s)");
    }

    table::write_rows(&opts.out_path, &cleaned)?;
    logf!("Normalize: wrote {} rows → {}", cleaned.len(), opts.out_path.display());
    progress.log(&format!("Cleaned data saved to '{}'.", opts.out_path.display()));

    progress.log(&report::brand_price_chart(&mean_price_by_brand(&cleaned)));
    progress.log(&report::histogram_chart(&price_histogram(&cleaned, opts.histogram_bins)));
    progress.log(&report::price_review_chart(&price_review_points(&cleaned)));
    progress.finish();

    Ok(NormalizeSummary { rows: cleaned.len(), unpriced })
}
