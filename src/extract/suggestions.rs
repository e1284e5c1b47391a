//! "Did you mean" suggestion extraction.

use dom_query::{Document, Selection};

/// Pulls alternate-spelling suggestions from the page's suggestion list,
/// in document order. An absent list yields an empty sequence.
#[must_use]
pub fn extract_suggestions(doc: &Document) -> Vec<String> {
    doc.select(".suggestion-list a")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node).text().trim().to_string())
        .collect()
}
