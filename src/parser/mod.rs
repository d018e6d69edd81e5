pub mod detail;
pub mod list;

use scraper::{ElementRef, Html, Selector};

/// Parse a selector literal. Callers only pass constant selectors.
fn sel(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

/// First element in the document matching `css`.
pub fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    doc.select(&sel(css)).next()
}

/// First descendant of `el` matching `css`.
pub fn find<'a>(el: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    el.select(&sel(css)).next()
}

/// All descendants of `el` matching `css`, in document order.
pub fn find_all<'a>(el: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    el.select(&sel(css)).collect()
}

/// Visible text with every fragment trimmed and blank fragments dropped.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Text of the first descendant matching `css`, or empty.
pub fn text_of(el: ElementRef<'_>, css: &str) -> String {
    find(el, css).map(stripped_text).unwrap_or_default()
}
