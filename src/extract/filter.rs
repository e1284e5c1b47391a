//! Word-type filtering and display limiting.

use crate::extract::result::TranslationGroup;
use crate::extract::word_type::WordType;

/// Default maximum number of displayed translations.
pub const DEFAULT_DISPLAY_COUNT: usize = 10;

/// Caller-side bounds on the extracted output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Maximum number of translations kept across all groups.
    pub display_count: usize,
    /// Word types to keep. An empty set accepts every type.
    pub word_types: Vec<WordType>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            display_count: DEFAULT_DISPLAY_COUNT,
            word_types: WordType::ALL.to_vec(),
        }
    }
}

impl FilterOptions {
    #[must_use]
    pub fn accepts(&self, word_type: WordType) -> bool {
        self.word_types.is_empty() || self.word_types.contains(&word_type)
    }
}

/// Applies the type filter and display limit over the aggregated groups.
///
/// Translations are walked in group order, then row order; the walk stops
/// adding entries the moment the display count is reached. Groups keep
/// their position and raw `row_count` even when every translation of
/// theirs is dropped.
#[must_use]
pub fn apply(groups: Vec<TranslationGroup>, options: &FilterOptions) -> Vec<TranslationGroup> {
    let mut remaining = options.display_count;
    let mut filtered = Vec::with_capacity(groups.len());

    for mut group in groups {
        group
            .translations
            .retain(|translation| options.accepts(translation.word_type));
        group.translations.truncate(remaining);
        remaining -= group.translations.len();
        filtered.push(group);
    }

    filtered
}
