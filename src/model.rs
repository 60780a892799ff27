// src/model.rs
//
// Row types for the three stages. Column names match the files the
// pipeline has always produced, so existing CSVs keep loading.

use serde::{Deserialize, Serialize};

/// Column names of a row type, in file order. Lets an empty table still
/// carry its header row.
pub trait Columns {
    const COLUMNS: &'static [&'static str];
}

/// One product card as read off the listing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawListing {
    #[serde(rename = "Baslik")]
    pub title: String,
    #[serde(rename = "Fiyat")]
    pub price_raw: String,
    #[serde(rename = "Yorum_Sayisi", default)]
    pub review_count_raw: String,
}

/// Raw fields plus typed price, review count and brand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanListing {
    #[serde(rename = "Baslik")]
    pub title: String,
    #[serde(rename = "Fiyat")]
    pub price_raw: String,
    #[serde(rename = "Yorum_Sayisi", default)]
    pub review_count_raw: String,
    #[serde(rename = "Fiyat_Temiz")]
    pub price: Option<f64>,
    #[serde(rename = "Yorum_Sayisi_Temiz", default)]
    pub review_count: u32,
    #[serde(rename = "Marka", default)]
    pub brand: String,
}

impl Columns for RawListing {
    const COLUMNS: &'static [&'static str] = &["Baslik", "Fiyat", "Yorum_Sayisi"];
}

impl Columns for CleanListing {
    const COLUMNS: &'static [&'static str] =
        &["Baslik", "Fiyat", "Yorum_Sayisi", "Fiyat_Temiz", "Yorum_Sayisi_Temiz", "Marka"];
}

/// Dashboard record: a cleaned row with capacities read from the title.
/// Capacities live in memory only.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub clean: CleanListing,
    pub ram_gb: Option<u32>,
    pub storage_gb: Option<u32>,
}

impl Listing {
    pub fn title(&self) -> &str { &self.clean.title }
    pub fn brand(&self) -> &str { &self.clean.brand }
    pub fn price(&self) -> Option<f64> { self.clean.price }
    pub fn review_count(&self) -> u32 { self.clean.review_count }
}
