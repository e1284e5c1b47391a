//! Result-table walking.
//!
//! Each `table.searchResultsTable` on the page becomes one
//! [`TranslationGroup`] holding its full, unfiltered candidate list.

use dom_query::{Document, Selection};

use crate::extract::direction::Direction;
use crate::extract::result::{Translation, TranslationGroup};
use crate::extract::word_type::WordType;

const RESULT_TABLE: &str = "table.searchResultsTable";

/// Extracts one group per result table, in document order.
///
/// Body rows tagged as mobile-only category duplicates and rows carrying an
/// inline `style` attribute are presentation noise and never count. The
/// first remaining row of each table is the column-header row: excluded
/// from the data but reflected in `row_count` (`rows - 1`). A data row
/// whose result-language anchor is empty still counts toward `row_count`
/// but yields no [`Translation`].
#[must_use]
pub fn extract_groups(doc: &Document, direction: Direction) -> Vec<TranslationGroup> {
    let mut groups = Vec::new();

    for table_node in doc.select(RESULT_TABLE).nodes() {
        let table = Selection::from(*table_node);

        let rows: Vec<Selection> = table
            .select("tbody tr")
            .nodes()
            .iter()
            .map(|node| Selection::from(*node))
            .filter(|row| !is_noise_row(row))
            .collect();

        let row_count = rows.len().saturating_sub(1);
        let mut translations = Vec::new();

        // Row 0 is the column-header row.
        for row in rows.iter().skip(1) {
            if let Some(translation) = extract_row(row, direction) {
                translations.push(translation);
            }
        }

        groups.push(TranslationGroup {
            title: group_title(&table),
            translations,
            row_count,
        });
    }

    groups
}

fn extract_row(row: &Selection, direction: Direction) -> Option<Translation> {
    let english = row.select("td[lang='en'] a").text().trim().to_string();
    let turkish = row.select("td[lang='tr'] a").text().trim().to_string();

    let (text, meaning) = match direction {
        Direction::EnglishToTurkish => (turkish, english),
        Direction::TurkishToEnglish => (english, turkish),
    };

    // Malformed/ad rows lack the result-language anchor; counted but skipped.
    if text.is_empty() {
        return None;
    }

    let word_type = WordType::from_abbrev(&row.select("td[lang='en'] i").text());

    let category = row
        .select("td")
        .nodes()
        .get(1)
        .map(|node| Selection::from(*node).text().trim().to_string())
        .unwrap_or_default();

    Some(Translation {
        word_type,
        text,
        meaning,
        category,
    })
}

fn is_noise_row(row: &Selection) -> bool {
    if row.has_attr("style") {
        return true;
    }

    row.attr("class")
        .is_some_and(|class| class.split_whitespace().any(|c| c == "mobile-category-row"))
}

/// The `h2` heading tureng renders before each result table.
fn group_title(table: &Selection) -> String {
    let Some(node) = table.nodes().first() else {
        return String::new();
    };

    let mut sibling = node.prev_sibling();
    while let Some(prev) = sibling {
        if prev.is_element() {
            let name = prev.node_name().map(|name| name.to_string());
            if name.as_deref() == Some("h2") {
                return Selection::from(prev).text().trim().to_string();
            }
        }
        sibling = prev.prev_sibling();
    }

    String::new()
}
