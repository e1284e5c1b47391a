//! Lookup-page extraction pipeline.

use dom_query::Document;

use crate::extract::direction;
use crate::extract::filter::{self, FilterOptions};
use crate::extract::result::PageResult;
use crate::extract::suggestions;
use crate::extract::table;

/// Runs the full extraction pass over a fetched lookup page.
///
/// Detects the translation direction, walks the result tables into raw
/// groups, then applies the caller's type filter and display limit. The
/// presence signal (`total_row_count`) is computed from the raw counts
/// before filtering, so a lookup whose entries are all filtered out by
/// type still reports as found. When nothing was found, the page's
/// suggestion list is extracted instead and the groups are dropped.
#[must_use]
pub fn extract_page(doc: &Document, query: &str, options: &FilterOptions) -> PageResult {
    let detected = direction::detect(doc);
    let groups = table::extract_groups(doc, detected);
    let total_row_count = groups.iter().map(|group| group.row_count).sum();

    if total_row_count == 0 {
        return PageResult {
            query: query.to_string(),
            direction: detected,
            total_row_count,
            groups: Vec::new(),
            suggestions: suggestions::extract_suggestions(doc),
        };
    }

    PageResult {
        query: query.to_string(),
        direction: detected,
        total_row_count,
        groups: filter::apply(groups, options),
        suggestions: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::direction::Direction;
    use crate::extract::word_type::WordType;

    const SMALL_PAGE: &str = r#"
        <h2>Meanings of "brave"</h2>
        <table class="searchResultsTable"><tbody>
            <tr><td class="c1">Category</td><td class="c2">English</td><td class="c3">Turkish</td></tr>
            <tr><td>1</td><td>Common Usage</td>
                <td lang="en"><a>brave</a> <i>adj.</i></td><td lang="tr"><a>cesur</a></td></tr>
            <tr><td>2</td><td>Common Usage</td>
                <td lang="en"><a>brave</a> <i>v.</i></td><td lang="tr"><a>göğüs germek</a></td></tr>
        </tbody></table>"#;

    const EMPTY_PAGE: &str = r#"
        <p>Maybe the correct one is</p>
        <ul class="suggestion-list"><li><a>brove</a></li><li><a>brace</a></li></ul>"#;

    #[test]
    fn test_found_page_has_no_suggestions() {
        let doc = Document::from(SMALL_PAGE);
        let result = extract_page(&doc, "brave", &FilterOptions::default());

        assert_eq!(result.query, "brave");
        assert_eq!(result.direction, Direction::EnglishToTurkish);
        assert_eq!(result.total_row_count, 2);
        assert!(!result.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_empty_page_falls_back_to_suggestions() {
        let doc = Document::from(EMPTY_PAGE);
        let result = extract_page(&doc, "brove", &FilterOptions::default());

        assert!(result.is_empty());
        assert!(result.groups.is_empty());
        assert_eq!(result.suggestions, vec!["brove", "brace"]);
    }

    #[test]
    fn test_total_count_ignores_type_filter() {
        let doc = Document::from(SMALL_PAGE);
        let options = FilterOptions {
            display_count: 100,
            word_types: vec![WordType::Adverb],
        };
        let result = extract_page(&doc, "brave", &options);

        // Everything is filtered out by type, yet the term was found.
        assert_eq!(result.total_row_count, 2);
        assert!(result.groups[0].translations.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_kept_translations_respect_filter_and_limit() {
        let doc = Document::from(SMALL_PAGE);
        let options = FilterOptions {
            display_count: 1,
            word_types: WordType::ALL.to_vec(),
        };
        let result = extract_page(&doc, "brave", &options);

        assert_eq!(result.groups[0].translations.len(), 1);
        assert_eq!(result.groups[0].translations[0].text, "cesur");
        assert_eq!(result.groups[0].row_count, 2);
    }
}
