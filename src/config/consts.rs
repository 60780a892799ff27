// src/config/consts.rs

// Source page
pub const LISTING_URL: &str = "https://www.hepsiburada.com/laptop-notebook-dizustu-bilgisayar-c-98";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Class markers on the listing page
pub const CARD_CLASS: &str = "productListContent-zAP0Y5msy8OHn5z7T_K_";
pub const TITLE_CLASS: &str = "title-module_titleText__8FlNQ";
pub const PRICE_CLASS: &str = "price-module_finalPrice__LtjvY";
pub const REVIEWS_CLASS: &str = "rate-module_count__fjUng";

// Placeholders for absent card fields
pub const MISSING_PRICE: &str = "N/A";
pub const MISSING_REVIEWS: &str = "0";

// Readiness polling
pub const READY_MIN_ITEMS: usize = 1;
pub const READY_TIMEOUT_SECS: u64 = 15;
pub const READY_POLL_MS: u64 = 1_500;

// Files
pub const RAW_FILE: &str = "hepsiburada_laptoplar.csv";
pub const CLEAN_FILE: &str = "hepsiburada_laptoplar_temiz.csv";
pub const LOG_FILE: &str = ".store/pipeline.log";

// Currency tokens stripped from price text
pub const CURRENCY_TOKENS: &[&str] = &["TL", "₺"];

// Dashboard
pub const MAX_RAM_GB: u32 = 64;
pub const DEFAULT_BRAND_COUNT: usize = 5;
pub const HISTOGRAM_BINS: usize = 20;
pub const WORD_LIMIT: usize = 60;

/// Terms present in nearly every title; excluded from word frequencies.
pub const STOP_WORDS: &[&str] = &[
    "Bilgisayar", "Taşınabilir", "Laptop", "Notebook", "ve", "ile", "için", "TL", "Inç", "FHD",
];
