// tests/filter_view.rs
//
// Dashboard filtering and summaries without any UI.

use std::collections::BTreeSet;

use laptop_market::analysis::{FilterSpec, FilteredView, PriceRange, Summary};
use laptop_market::extract::enrich;
use laptop_market::model::{CleanListing, Listing};
use laptop_market::normalize::derive_brand;

fn listing(title: &str, price: Option<f64>, reviews: u32) -> Listing {
    enrich(CleanListing {
        title: title.into(),
        price_raw: String::new(),
        review_count_raw: String::new(),
        price,
        review_count: reviews,
        brand: derive_brand(title),
    })
}

fn data() -> Vec<Listing> {
    vec![
        listing("Asus Vivobook 16GB 512GB SSD", Some(20_000.0), 10),
        listing("Asus Zenbook 8GB 256GB SSD", Some(15_000.0), 3),
        listing("Lenovo IdeaPad 16GB 1TB SSD", Some(25_000.0), 0),
        listing("HP Victus 32GB 1TB SSD", Some(40_000.0), 7),
        listing("Lenovo Legion 32GB 2TB SSD", None, 1),
        listing("Apple MacBook 8GB 256GB SSD", Some(30_000.0), 50),
    ]
}

fn spec(brands: &[&str], lo: f64, hi: f64, rams: &[u32]) -> FilterSpec {
    FilterSpec {
        brands: brands.iter().map(|b| b.to_string()).collect(),
        price: PriceRange::new(lo, hi),
        rams: rams.iter().copied().collect::<BTreeSet<u32>>(),
    }
}

#[test]
fn predicate_order_does_not_matter() {
    let rows = data();
    let f = spec(&["Asus", "Lenovo", "HP"], 16_000.0, 40_000.0, &[16, 32]);

    let brand_first = FilteredView::all(&rows)
        .retain(|l| f.accepts_brand(l))
        .retain(|l| f.accepts_price(l))
        .retain(|l| f.accepts_ram(l));
    let ram_first = FilteredView::all(&rows)
        .retain(|l| f.accepts_ram(l))
        .retain(|l| f.accepts_price(l))
        .retain(|l| f.accepts_brand(l));
    let combined = FilteredView::apply(&rows, &f);

    assert_eq!(brand_first.row_ix, ram_first.row_ix);
    assert_eq!(brand_first.row_ix, combined.row_ix);
    // Asus Vivobook, Lenovo IdeaPad, HP Victus; Lenovo Legion has no price
    assert_eq!(combined.row_ix, vec![0, 2, 3]);
}

#[test]
fn price_bounds_are_inclusive() {
    let rows = data();
    let f = spec(&["Asus", "Lenovo", "HP", "Apple"], 15_000.0, 25_000.0, &[8, 16, 32]);
    let view = FilteredView::apply(&rows, &f);
    assert_eq!(view.row_ix, vec![0, 1, 2]);
}

#[test]
fn summary_matches_the_filtered_rows() {
    let rows = data();
    let f = spec(&["Asus", "Lenovo", "HP"], 0.0, 100_000.0, &[8, 16, 32]);
    let view = FilteredView::apply(&rows, &f);
    let summary = Summary::of(&view).unwrap();

    let prices: Vec<f64> = view.iter().filter_map(|l| l.price()).collect();
    let manual = prices.iter().sum::<f64>() / prices.len() as f64;

    assert_eq!(summary.count, 4);
    assert!((summary.mean_price - manual).abs() < 1e-9);
    assert_eq!(summary.min_price, 15_000.0);
    // 16 GB twice (Asus, Lenovo) against 32 GB once (HP) and 8 GB once
    assert_eq!(summary.modal_ram, Some(16));
}

#[test]
fn empty_selection_has_no_summary() {
    let rows = data();
    let f = spec(&[], 0.0, 100_000.0, &[8, 16, 32]);
    let view = FilteredView::apply(&rows, &f);
    assert!(view.is_empty());
    assert_eq!(Summary::of(&view), None);
}

#[test]
fn defaults_take_first_brands_and_full_range() {
    let rows = data();
    let f = FilterSpec::defaults_for(&rows, 2);
    let brands: Vec<&str> = f.brands.iter().map(String::as_str).collect();
    assert_eq!(brands, vec!["Apple", "Asus"]);
    assert_eq!(f.price, PriceRange::new(15_000.0, 40_000.0));
    assert_eq!(f.rams.iter().copied().collect::<Vec<_>>(), vec![8, 16, 32]);
}
