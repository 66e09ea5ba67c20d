//! Visible-text helpers for table cells.

use scraper::ElementRef;

/// Elements whose text never renders.
const HIDDEN: &[&str] = &["script", "style", "template", "noscript"];

fn text_pieces<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.descendants()
        .filter_map(|n| n.value().as_text().map(|t| (n, t)))
        .filter(|(n, _)| {
            !n.ancestors().any(|a| {
                a.value()
                    .as_element()
                    .is_some_and(|e| HIDDEN.contains(&e.name()))
            })
        })
        .map(|(_, t)| t.trim())
        .filter(|s| !s.is_empty())
}

/// Every visible text node of `el`, trimmed and concatenated with no separator.
/// Tooltips, icons and other nested markup contribute only their text.
pub(crate) fn cell_text(el: ElementRef<'_>) -> String {
    text_pieces(el).collect()
}

/// Header labels keep a single space between text nodes (`Value<br>($)` → `Value ($)`).
pub(crate) fn header_text(el: ElementRef<'_>) -> String {
    text_pieces(el).collect::<Vec<_>>().join(" ")
}
