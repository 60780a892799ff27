// src/normalize.rs
//
// Text → number conversions for the raw table. Every function here is
// total: a field that cannot be read becomes `None` or `0`, never an error.

use crate::config::consts::CURRENCY_TOKENS;
use crate::model::{CleanListing, RawListing};

/// Turkish-formatted currency text to its face value.
/// `"36.423,60 TL"` → `36423.60`. `.` groups thousands, `,` is the decimal mark.
pub fn parse_price(text: &str) -> Option<f64> {
    let mut s = s!(text);
    for tok in CURRENCY_TOKENS {
        s = s.replace(tok, "");
    }
    let s: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    // only plain decimals; rules out "N/A", "inf", signs and stray text
    let plain = !s.is_empty()
        && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.chars().any(|c| c.is_ascii_digit())
        && s.matches('.').count() <= 1;
    if !plain {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `"(240)"` → 240. Absent or unreadable counts are 0.
pub fn parse_review_count(text: &str) -> u32 {
    text.trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .trim()
        .parse()
        .unwrap_or(0)
}

/// First whitespace-delimited token of the title, as written.
pub fn derive_brand(title: &str) -> String {
    title.split_whitespace().next().map(String::from).unwrap_or_default()
}

pub fn clean_listing(raw: &RawListing) -> CleanListing {
    CleanListing {
        title: raw.title.clone(),
        price_raw: raw.price_raw.clone(),
        review_count_raw: raw.review_count_raw.clone(),
        price: parse_price(&raw.price_raw),
        review_count: parse_review_count(&raw.review_count_raw),
        brand: derive_brand(&raw.title),
    }
}

pub fn clean_all(raws: &[RawListing]) -> Vec<CleanListing> {
    raws.iter().map(clean_listing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_turkish_format() {
        assert_eq!(parse_price("36.423,60 TL"), Some(36423.60));
        assert_eq!(parse_price("10.000,00 TL"), Some(10000.0));
        assert_eq!(parse_price("20.000,50 TL"), Some(20000.50));
        assert_eq!(parse_price("  1.249.999,99\u{a0}TL "), Some(1249999.99));
        assert_eq!(parse_price("899 TL"), Some(899.0));
        assert_eq!(parse_price("₺12.500"), Some(12500.0));
    }

    #[test]
    fn price_unreadable_is_none() {
        assert_eq!(parse_price("N/A"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("TL"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price("-5,00 TL"), None);
        assert_eq!(parse_price("1,2,3"), None);
        // too many digits for f64 would read as infinity
        assert_eq!(parse_price(&"9".repeat(400)), None);
    }

    #[test]
    fn review_count_parens() {
        assert_eq!(parse_review_count("(240)"), 240);
        assert_eq!(parse_review_count("( 7 )"), 7);
        assert_eq!(parse_review_count("0"), 0);
        assert_eq!(parse_review_count(""), 0);
        assert_eq!(parse_review_count("(yeni)"), 0);
        assert_eq!(parse_review_count("(-3)"), 0);
    }

    #[test]
    fn brand_is_first_token_and_idempotent() {
        assert_eq!(derive_brand("Asus Vivobook 15"), "Asus");
        assert_eq!(derive_brand("  lenovo  IdeaPad"), "lenovo");
        assert_eq!(derive_brand(""), "");
        let once = derive_brand("MSI Katana 15");
        assert_eq!(derive_brand(&once), once);
    }

    #[test]
    fn clean_listing_fills_typed_fields() {
        let raw = RawListing {
            title: s!("HP 15s Intel Core i5 8GB 512GB SSD"),
            price_raw: s!("18.999,00 TL"),
            review_count_raw: s!("(12)"),
        };
        let c = clean_listing(&raw);
        assert_eq!(c.price, Some(18999.0));
        assert_eq!(c.review_count, 12);
        assert_eq!(c.brand, "HP");
        assert_eq!(c.title, raw.title);
    }
}
