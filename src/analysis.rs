// src/analysis.rs
//
// Filtering and aggregation over the loaded dataset.
//
// - FilterSpec: the sidebar selection (brands, inclusive price range, RAM tiers).
// - FilteredView: indices of rows that pass, borrowing the dataset instead of
//   cloning rows.
// - Summary and group-bys: computed over a view only, never over the whole
//   dataset behind the user's back.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{CleanListing, Listing};

/* ---------------- Filter specification ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self { Self { min, max } }

    #[inline]
    pub fn contains(&self, price: f64) -> bool { price >= self.min && price <= self.max }

    /// Whole-currency bounds covering every priced row: floor of the
    /// cheapest, ceil of the dearest.
    pub fn covering<'a, I>(rows: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a CleanListing>,
    {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in rows.into_iter().filter_map(|r| r.price) {
            lo = lo.min(p);
            hi = hi.max(p);
        }
        (lo <= hi).then(|| Self::new(lo.floor(), hi.ceil()))
    }
}

impl Default for PriceRange {
    fn default() -> Self { Self { min: 0.0, max: f64::INFINITY } }
}

/// (brand set, price interval, RAM set). Empty sets accept nothing.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FilterSpec {
    pub brands: BTreeSet<String>,
    pub price: PriceRange,
    pub rams: BTreeSet<u32>,
}

impl FilterSpec {
    /// Starting selection for a fresh dashboard: the first `brand_count`
    /// brands alphabetically, the covering price range, every RAM tier.
    pub fn defaults_for(data: &[Listing], brand_count: usize) -> Self {
        Self {
            brands: all_brands(data).into_iter().take(brand_count).collect(),
            price: PriceRange::covering(data.iter().map(|l| &l.clean)).unwrap_or_default(),
            rams: all_rams(data).into_iter().collect(),
        }
    }

    #[inline]
    pub fn accepts_brand(&self, l: &Listing) -> bool { self.brands.contains(l.brand()) }

    /// Rows without a price never pass a price filter.
    #[inline]
    pub fn accepts_price(&self, l: &Listing) -> bool {
        l.price().is_some_and(|p| self.price.contains(p))
    }

    #[inline]
    pub fn accepts_ram(&self, l: &Listing) -> bool {
        l.ram_gb.is_some_and(|r| self.rams.contains(&r))
    }

    pub fn accepts(&self, l: &Listing) -> bool {
        self.accepts_brand(l) && self.accepts_price(l) && self.accepts_ram(l)
    }
}

/// Distinct brands, sorted.
pub fn all_brands(data: &[Listing]) -> Vec<String> {
    let set: BTreeSet<&str> = data.iter().map(|l| l.brand()).filter(|b| !b.is_empty()).collect();
    set.into_iter().map(String::from).collect()
}

/// Distinct RAM tiers, ascending.
pub fn all_rams(data: &[Listing]) -> Vec<u32> {
    let set: BTreeSet<u32> = data.iter().filter_map(|l| l.ram_gb).collect();
    set.into_iter().collect()
}

/* ---------------- Filtered view ---------------- */

/// Zero-copy filtered view: positions of kept rows in the dataset.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    data: &'a [Listing],
}

impl<'a> FilteredView<'a> {
    pub fn all(data: &'a [Listing]) -> Self {
        Self { row_ix: (0..data.len()).collect(), data }
    }

    pub fn apply(data: &'a [Listing], spec: &FilterSpec) -> Self {
        Self::all(data).retain(|l| spec.accepts(l))
    }

    /// Narrow further by one predicate.
    pub fn retain<F>(mut self, keep: F) -> Self
    where
        F: Fn(&Listing) -> bool,
    {
        let data = self.data;
        self.row_ix.retain(|&i| keep(&data[i]));
        self
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    pub fn row(&self, i: usize) -> Option<&'a Listing> {
        self.row_ix.get(i).and_then(|&ix| self.data.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Listing> + '_ {
        let data = self.data;
        self.row_ix.iter().map(move |&ix| &data[ix])
    }

    pub fn cleaned(&self) -> impl Iterator<Item = &'a CleanListing> + '_ {
        self.iter().map(|l| &l.clean)
    }
}

/* ---------------- Summary ---------------- */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_price: f64,
    pub min_price: f64,
    pub modal_ram: Option<u32>,
}

impl Summary {
    /// `None` for an empty view (or one without a single price): the caller
    /// shows a "widen your filters" notice instead of NaN figures.
    pub fn of(view: &FilteredView<'_>) -> Option<Self> {
        if view.is_empty() {
            return None;
        }
        let prices: Vec<f64> = view.iter().filter_map(|l| l.price()).collect();
        if prices.is_empty() {
            return None;
        }
        let mean_price = prices.iter().sum::<f64>() / prices.len() as f64;
        let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
        Some(Self {
            count: view.len(),
            mean_price,
            min_price,
            modal_ram: mode(view.iter().filter_map(|l| l.ram_gb)),
        })
    }
}

/// Most frequent value; ties go to the smallest.
pub fn mode<I: IntoIterator<Item = u32>>(values: I) -> Option<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let best = counts.values().copied().max()?;
    counts.into_iter().find(|(_, c)| *c == best).map(|(v, _)| v)
}

/* ---------------- Group-bys ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub struct GroupMean<K> {
    pub key: K,
    pub mean_price: f64,
    pub count: usize,
}

fn group_means<K: Ord, I: IntoIterator<Item = (K, f64)>>(pairs: I) -> Vec<GroupMean<K>> {
    let mut acc: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (k, p) in pairs {
        let e = acc.entry(k).or_insert((0.0, 0));
        e.0 += p;
        e.1 += 1;
    }
    acc.into_iter()
        .map(|(key, (sum, count))| GroupMean { key, mean_price: sum / count as f64, count })
        .collect()
}

/// Mean price per brand, brands in sorted order. Unpriced rows are skipped.
pub fn mean_price_by_brand<'a, I>(rows: I) -> Vec<GroupMean<String>>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    group_means(
        rows.into_iter()
            .filter_map(|r| r.price.map(|p| (r.brand.clone(), p))),
    )
}

/// Mean price per RAM tier, ascending.
pub fn mean_price_by_ram(view: &FilteredView<'_>) -> Vec<GroupMean<u32>> {
    group_means(view.iter().filter_map(|l| Some((l.ram_gb?, l.price()?))))
}

/// Same data as `mean_price_by_brand`, highest mean first.
pub fn by_mean_desc<K: Clone>(groups: &[GroupMean<K>]) -> Vec<GroupMean<K>> {
    let mut out = groups.to_vec();
    out.sort_by(|a, b| b.mean_price.total_cmp(&a.mean_price));
    out
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Share {
    pub storage_gb: u32,
    pub count: usize,
    pub fraction: f64,
}

/// Count and fraction of rows per storage size, ascending size.
pub fn storage_share(view: &FilteredView<'_>) -> Vec<Share> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for s in view.iter().filter_map(|l| l.storage_gb) {
        *counts.entry(s).or_default() += 1;
    }
    let total: usize = counts.values().sum();
    counts
        .into_iter()
        .map(|(storage_gb, count)| Share {
            storage_gb,
            count,
            fraction: count as f64 / total as f64,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HistBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
}

/// Equal-width bins over [min, max]. The maximum lands in the last bin.
/// A single distinct price yields one bin.
pub fn price_histogram<'a, I>(rows: I, bins: usize) -> Vec<HistBin>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    let prices: Vec<f64> = rows.into_iter().filter_map(|r| r.price).collect();
    if prices.is_empty() || bins == 0 {
        return Vec::new();
    }
    let lo = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi <= lo {
        return vec![HistBin { lo, hi, count: prices.len() }];
    }

    let width = (hi - lo) / bins as f64;
    let mut out: Vec<HistBin> = (0..bins)
        .map(|i| HistBin {
            lo: lo + width * i as f64,
            hi: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();
    for p in prices {
        let ix = (((p - lo) / width).floor() as usize).min(bins - 1);
        out[ix].count += 1;
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricePoint<'a> {
    pub price: f64,
    pub reviews: u32,
    pub brand: &'a str,
    pub title: &'a str,
}

pub fn price_review_points<'a, I>(rows: I) -> Vec<PricePoint<'a>>
where
    I: IntoIterator<Item = &'a CleanListing>,
{
    rows.into_iter()
        .filter_map(|r| {
            Some(PricePoint {
                price: r.price?,
                reviews: r.review_count,
                brand: &r.brand,
                title: &r.title,
            })
        })
        .collect()
}

/// Pearson correlation of price against review count. `None` with fewer
/// than two points or no variance on either axis.
pub fn price_review_correlation(points: &[PricePoint<'_>]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mx = points.iter().map(|p| p.price).sum::<f64>() / n;
    let my = points.iter().map(|p| p.reviews as f64).sum::<f64>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for p in points {
        let dx = p.price - mx;
        let dy = p.reviews as f64 - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some(sxy / (sxx.sqrt() * syy.sqrt()))
}

/* ---------------- Word frequencies ---------------- */

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\w[\w']+").expect("word regex"))
}

/// Most frequent title words, case-folded for counting (first spelling seen
/// is the one returned). Words in `stop_words` are skipped regardless of case,
/// as are bare numbers such as screen sizes or model years.
pub fn word_frequencies<'a, I>(titles: I, stop_words: &[&str], limit: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let stop: Vec<String> = stop_words.iter().map(|w| w.to_lowercase()).collect();
    let mut counts: HashMap<String, (String, usize)> = HashMap::new();

    for title in titles {
        for m in word_re().find_iter(title) {
            let word = m.as_str();
            if word.chars().all(char::is_numeric) {
                continue;
            }
            let key = word.to_lowercase();
            if stop.contains(&key) {
                continue;
            }
            counts.entry(key).or_insert_with(|| (s!(word), 0)).1 += 1;
        }
    }

    let mut out: Vec<(String, usize)> = counts.into_values().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out.truncate(limit);
    out
}
