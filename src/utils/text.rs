//! Text normalization helpers.

use scraper::ElementRef;

/// Elements whose text content is never rendered.
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// Collapse whitespace runs to single spaces and trim.
///
/// Returns `None` when nothing is left.
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}

/// Text nodes under `element` in document order, skipping the contents of
/// `script`, `style` and `template`.
pub fn visible_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()));
        (!hidden).then_some(&**text)
    })
}

/// Visible text of an element: each text node trimmed, empty nodes dropped,
/// the rest joined by a single space.
pub fn joined_text(element: &ElementRef<'_>) -> String {
    visible_text(*element)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `text` to at most `max` characters (Unicode scalar values).
///
/// Returns the text and whether anything was cut.
pub fn truncate_chars(text: &str, max: usize) -> (&str, bool) {
    match text.char_indices().nth(max) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}
