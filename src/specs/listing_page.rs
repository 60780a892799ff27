// src/specs/listing_page.rs
//
// Category listing page: one `<li>` card per product with title, final
// price and review-count elements identified by class markers.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{CARD_CLASS, MISSING_PRICE, MISSING_REVIEWS, PRICE_CLASS, REVIEWS_CLASS, TITLE_CLASS};
use crate::core::sanitize::normalize_ws;
use crate::model::RawListing;

/// Class markers for one page layout.
#[derive(Clone, Copy, Debug)]
pub struct Markers<'a> {
    pub card: &'a str,
    pub title: &'a str,
    pub price: &'a str,
    pub reviews: &'a str,
}

impl Default for Markers<'static> {
    fn default() -> Self {
        Self { card: CARD_CLASS, title: TITLE_CLASS, price: PRICE_CLASS, reviews: REVIEWS_CLASS }
    }
}

/// Compiled `.class` selectors for a set of markers.
pub struct CardSelectors {
    card: Selector,
    title: Selector,
    price: Selector,
    reviews: Selector,
}

fn class_selector(class: &str) -> Option<Selector> {
    match Selector::parse(&format!(".{class}")) {
        Ok(sel) => Some(sel),
        Err(e) => {
            loge!("Listing: bad class marker {class:?}: {e:?}");
            None
        }
    }
}

impl CardSelectors {
    /// `None` when a marker is not a usable class name.
    pub fn new(markers: &Markers<'_>) -> Option<Self> {
        Some(Self {
            card: class_selector(markers.card)?,
            title: class_selector(markers.title)?,
            price: class_selector(markers.price)?,
            reviews: class_selector(markers.reviews)?,
        })
    }
}

/// Text of the first descendant matching `sel`, entities decoded and
/// whitespace collapsed. Empty text counts as absent.
fn text_of(card: ElementRef<'_>, sel: &Selector) -> Option<String> {
    let el = card.select(sel).next()?;
    let text = normalize_ws(&el.text().collect::<String>());
    (!text.is_empty()).then_some(text)
}

/// Number of listing cards currently in the markup. Used as the readiness
/// predicate while the page renders.
pub fn count_cards(doc: &str, markers: &Markers<'_>) -> usize {
    let Some(sel) = class_selector(markers.card) else { return 0 };
    Html::parse_document(doc).select(&sel).count()
}

/// One card → one row. Cards without a title are skipped; a missing price
/// becomes `N/A` and missing reviews `0`.
pub fn parse_card(card: ElementRef<'_>, sels: &CardSelectors) -> Option<RawListing> {
    let title = text_of(card, &sels.title)?;
    let price_raw = text_of(card, &sels.price).unwrap_or_else(|| s!(MISSING_PRICE));
    let review_count_raw = text_of(card, &sels.reviews).unwrap_or_else(|| s!(MISSING_REVIEWS));
    Some(RawListing { title, price_raw, review_count_raw })
}

/// Split out for unit tests.
pub fn parse_doc(doc: &str, markers: &Markers<'_>) -> Vec<RawListing> {
    let Some(sels) = CardSelectors::new(markers) else { return Vec::new() };
    let t = std::time::Instant::now();
    let html = Html::parse_document(doc);
    let mut cards = 0usize;
    let rows: Vec<RawListing> = html
        .select(&sels.card)
        .inspect(|_| cards += 1)
        .filter_map(|c| parse_card(c, &sels))
        .collect();
    logd!(
        "Listing: parsed {} of {} cards in {:?}",
        rows.len(), cards, t.elapsed()
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: Option<&str>, price: Option<&str>, reviews: Option<&str>) -> String {
        let mut s = format!(r#"<li class="{CARD_CLASS}" data-test-id="product-card"><div><a href="/p">"#);
        if let Some(t) = title {
            s.push_str(&format!(r#"<h3 class="{TITLE_CLASS}" title="x">{t}</h3>"#));
        }
        s.push_str("</a>");
        if let Some(p) = price {
            s.push_str(&format!(r#"<div class="price-wrap"><div class="{PRICE_CLASS}">{p}</div></div>"#));
        }
        if let Some(r) = reviews {
            s.push_str(&format!(r#"<span class="rating"><span class="{REVIEWS_CLASS}">{r}</span></span>"#));
        }
        s.push_str("</div></li>");
        s
    }

    fn page(cards: &[String]) -> String {
        format!(
            "<html><body><ul class=\"productList\">{}</ul><footer><li class=\"x\">menu</li></footer></body></html>",
            cards.concat()
        )
    }

    #[test]
    fn parses_full_cards() {
        let doc = page(&[
            card(Some("Asus Vivobook 15 16GB 512GB SSD"), Some("36.423,60 TL"), Some("(240)")),
            card(Some("Lenovo  IdeaPad&nbsp;Slim 3"), Some("<span>20.000,50</span> TL"), Some("(3)")),
        ]);
        let rows = parse_doc(&doc, &Markers::default());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Asus Vivobook 15 16GB 512GB SSD");
        assert_eq!(rows[0].price_raw, "36.423,60 TL");
        assert_eq!(rows[0].review_count_raw, "(240)");
        assert_eq!(rows[1].title, "Lenovo IdeaPad Slim 3");
        assert_eq!(rows[1].price_raw, "20.000,50 TL");
    }

    #[test]
    fn drops_untitled_and_defaults_missing_fields() {
        let doc = page(&[
            card(None, Some("1.000,00 TL"), Some("(1)")),
            card(Some("HP 250 G9"), None, None),
        ]);
        let rows = parse_doc(&doc, &Markers::default());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "HP 250 G9");
        assert_eq!(rows[0].price_raw, "N/A");
        assert_eq!(rows[0].review_count_raw, "0");
    }

    #[test]
    fn named_entities_are_decoded() {
        let doc = page(&[card(
            Some("Casper Nirvana &Uuml;lt&ccedil;a 16GB &ndash; G&ouml;k"),
            Some("1.000,00&nbsp;TL"),
            Some("(&#52;)"),
        )]);
        let rows = parse_doc(&doc, &Markers::default());
        assert_eq!(rows[0].title, "Casper Nirvana Ültça 16GB – Gök");
        assert_eq!(rows[0].price_raw, "1.000,00 TL");
        assert_eq!(rows[0].review_count_raw, "(4)");
    }

    #[test]
    fn unusable_marker_reads_nothing() {
        let doc = page(&[card(Some("A"), None, None)]);
        let markers = Markers { card: "1bad", ..Markers::default() };
        assert_eq!(count_cards(&doc, &markers), 0);
        assert!(parse_doc(&doc, &markers).is_empty());
    }

    #[test]
    fn counts_cards_only() {
        let doc = page(&[card(Some("A"), None, None), card(Some("B"), None, None)]);
        assert_eq!(count_cards(&doc, &Markers::default()), 2);
        assert_eq!(count_cards("<html><body>loading…</body></html>", &Markers::default()), 0);
    }
}
