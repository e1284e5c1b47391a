//! Result types produced by the extraction pipeline.

use crate::extract::direction::Direction;
use crate::extract::word_type::WordType;

/// A single dictionary entry extracted from one result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Grammatical class from the row's abbreviation token.
    pub word_type: WordType,
    /// The result-language term.
    pub text: String,
    /// Its gloss in the query language.
    pub meaning: String,
    /// The row's second-column label (grammatical/contextual tag).
    pub category: String,
}

/// Entries originating from one result table.
///
/// Each table on the page represents a distinct sense of the query term,
/// e.g. primary meanings vs. compound terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationGroup {
    /// Heading text preceding the table; empty when the page carries none.
    pub title: String,
    pub translations: Vec<Translation>,
    /// Raw data-row count before any filtering, header row excluded.
    pub row_count: usize,
}

/// Everything extracted from one lookup page.
///
/// Built once per lookup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// The normalized query string.
    pub query: String,
    pub direction: Direction,
    /// Sum of all groups' raw row counts; zero means the term was not found.
    pub total_row_count: usize,
    pub groups: Vec<TranslationGroup>,
    /// Alternate spellings offered by the page, populated only when
    /// `total_row_count` is zero.
    pub suggestions: Vec<String>,
}

impl PageResult {
    /// `true` when the page contained no usable result rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_row_count == 0
    }
}
