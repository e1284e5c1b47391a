//! Extraction and classification pipeline for tureng lookup pages.
//!
//! Given a parsed document tree, the pipeline detects the translation
//! direction, walks the result tables into grouped, typed translation
//! entries, applies the caller's type filter and display limit, and falls
//! back to "did you mean" suggestions when the page holds no entries.

mod direction;
mod filter;
mod page;
mod result;
mod suggestions;
mod table;
mod word_type;

pub use direction::Direction;
pub use filter::{DEFAULT_DISPLAY_COUNT, FilterOptions};
pub use page::extract_page;
pub use result::{PageResult, Translation, TranslationGroup};
pub use word_type::WordType;
