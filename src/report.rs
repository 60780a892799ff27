// src/report.rs
//
// Plain-text charts printed by the normalizer: mean price per brand, price
// distribution, price against review count.

use std::fmt::Write;

use crate::analysis::{by_mean_desc, price_review_correlation, GroupMean, HistBin, PricePoint};

const BAR_WIDTH: usize = 40;
const TOP_REVIEWED: usize = 10;

/// Whole-currency amount with `,` thousands grouping: `36423.6` → `36,424 TL`.
pub fn format_price(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + 6);
    if rounded < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out.push_str(" TL");
    out
}

/// Horizontal bar scaled so `max` fills `width` cells.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return s!();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}

pub fn brand_price_chart(groups: &[GroupMean<String>]) -> String {
    let mut out = s!("Average price by brand\n");
    let sorted = by_mean_desc(groups);
    let max = sorted.first().map(|g| g.mean_price).unwrap_or(0.0);
    let label_w = sorted.iter().map(|g| g.key.chars().count()).max().unwrap_or(0);
    for g in &sorted {
        let _ = writeln!(
            out,
            "  {:<label_w$}  {:>14}  {} ({})",
            g.key,
            format_price(g.mean_price),
            bar(g.mean_price, max, BAR_WIDTH),
            g.count,
        );
    }
    out
}

pub fn histogram_chart(bins: &[HistBin]) -> String {
    let mut out = s!("Price distribution\n");
    let max = bins.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    for b in bins {
        let _ = writeln!(
            out,
            "  {:>14} - {:>14}  {:>4}  {}",
            format_price(b.lo),
            format_price(b.hi),
            b.count,
            bar(b.count as f64, max, BAR_WIDTH),
        );
    }
    out
}

pub fn price_review_chart(points: &[PricePoint<'_>]) -> String {
    let mut out = s!("Price vs. review count\n");
    match price_review_correlation(points) {
        Some(r) => { let _ = writeln!(out, "  correlation: {r:+.3} over {} listing(s)", points.len()); }
        None => { let _ = writeln!(out, "  correlation: n/a over {} listing(s)", points.len()); }
    }

    let mut top: Vec<&PricePoint<'_>> = points.iter().collect();
    top.sort_by(|a, b| b.reviews.cmp(&a.reviews).then(a.price.total_cmp(&b.price)));
    for p in top.into_iter().take(TOP_REVIEWED) {
        let _ = writeln!(out, "  {:>6} reviews  {:>14}  {}", p.reviews, format_price(p.price), p.title);
    }
    out
}
