//! HTML extraction for search-result and detail pages
//!
//! All functions here are pure and synchronous: they take a fetched body
//! as a string and never touch the network. This also keeps the
//! non-`Send` parsed DOM out of the async workers' await points.
//!
//! Selectors target the marketplace markup:
//! - search pages list listings as `.litter-card` elements, each wrapping
//!   an anchor to the detail page;
//! - detail pages carry a `.storefront__info` block of paragraphs whose
//!   bold lead-in is the label and whose remaining text is the value,
//!   e.g. `<p><strong>Kennel Name:</strong> Sunny Acres</p>`.

use crate::record::BreederRecord;
use scraper::{ElementRef, Html, Selector};

const LISTING_CARD_SELECTOR: &str = ".litter-card";
const CARD_ANCHOR_SELECTOR: &str = "a";
const INFO_LABEL_SELECTOR: &str = ".storefront__info p > strong";

/// Extracts the listing detail paths from a search-results page.
///
/// One path is emitted per listing card that carries an anchor with an
/// `href`; cards without one are skipped silently. The returned paths
/// are relative and must be resolved against the site base URL.
pub fn extract_listing_paths(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut paths = Vec::new();

    if let (Ok(card_selector), Ok(anchor_selector)) = (
        Selector::parse(LISTING_CARD_SELECTOR),
        Selector::parse(CARD_ANCHOR_SELECTOR),
    ) {
        for card in document.select(&card_selector) {
            if let Some(anchor) = card.select(&anchor_selector).next() {
                if let Some(href) = anchor.value().attr("href") {
                    paths.push(href.to_string());
                }
            }
        }
    }

    paths
}

/// Extracts a breeder record from a listing detail page.
///
/// Every label element inside the info block is read as a key/value
/// pair: the key is the bold text, the value is the enclosing
/// paragraph's text with the key prefix stripped. Keys are matched
/// against the fixed label table on [`BreederRecord`]; an unrecognized
/// key is logged and dropped without failing the record.
///
/// A record is always returned, even when no label matched — a fetched
/// page is never dropped silently.
pub fn extract_breeder(html: &str) -> BreederRecord {
    let document = Html::parse_document(html);
    let mut record = BreederRecord::default();

    if let Ok(label_selector) = Selector::parse(INFO_LABEL_SELECTOR) {
        for label in document.select(&label_selector) {
            let raw_key = label.text().collect::<String>();

            // The value is the paragraph's full text minus the bold key.
            let value = match label.parent().and_then(ElementRef::wrap) {
                Some(paragraph) => {
                    let text = paragraph.text().collect::<String>();
                    text.strip_prefix(&raw_key).unwrap_or(&text).to_string()
                }
                None => String::new(),
            };

            let key = raw_key.trim();
            let key = key.strip_suffix(':').unwrap_or(key);
            let value = value.trim();

            if !record.assign(key, value) {
                tracing::warn!("Encountered key {key:?} that was not handled/stored");
            }
        }
    }

    record
}
