//! Translation direction detection.

use dom_query::Document;

/// Marker text tureng places in the `.c2` header cell when the query
/// resolved to a Turkish term.
const TURKISH_HEADER: &str = "Türkçe";

/// Which of the two languages the query belongs to.
///
/// The direction is fixed once per lookup and decides which side of each
/// result row is the translation and which is the gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    EnglishToTurkish,
    TurkishToEnglish,
}

/// Detects the direction from the first result row's secondary-language
/// header cell.
///
/// A document without any result table detects as
/// [`Direction::EnglishToTurkish`]; downstream extraction then yields zero
/// rows, which is not an error.
#[must_use]
pub fn detect(doc: &Document) -> Direction {
    let first_row = doc.select("table.searchResultsTable tbody tr").first();

    if first_row.select(".c2").text().trim() == TURKISH_HEADER {
        Direction::TurkishToEnglish
    } else {
        Direction::EnglishToTurkish
    }
}
