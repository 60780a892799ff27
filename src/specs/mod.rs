//! # Page specs
//!
//! Pure HTML parsing for the pages the collector reads. A spec knows *where
//! the data lives in the markup* and nothing else: no fetching, no files.
//!
//! ## Conventions
//! - Elements are located by class marker with `scraper` selectors, so
//!   attribute order, quoting, extra classes and entities are handled by the
//!   HTML5 parser.
//! - Each spec returns typed rows (`model::RawListing`) so later stages can
//!   rely on a stable shape.
//! - Specs are testable offline against captured or synthetic fragments.
pub mod listing_page;
