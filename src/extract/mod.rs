//! Pure DOM extraction.
//!
//! Everything in here is a function from a parsed document to stub/record
//! types. The same code runs against a live navigation result or a saved
//! HTML fixture, which is what keeps the extractors testable offline.

pub mod loot;
pub mod weapons;

use scraper::ElementRef;

/// Anchor display name: the `title` attribute when present and non-empty,
/// else the anchor text.
pub(crate) fn link_name(link: &ElementRef<'_>) -> String {
    link.value()
        .attr("title")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| link.text().collect::<String>().trim().to_string())
}

/// Element text, trimmed.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
