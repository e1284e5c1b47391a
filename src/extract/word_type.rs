//! Word-type classification from tureng's abbreviation tokens.

use serde::{Deserialize, Serialize};

/// Grammatical class of a dictionary entry.
///
/// Derived purely from the abbreviation token printed next to the entry
/// (`n.`, `v.`, `adj.`, `adv.`); anything else classifies as [`WordType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Unknown,
}

impl WordType {
    /// Every variant, in display order. Used as the default type filter.
    pub const ALL: [Self; 5] = [
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Unknown,
    ];

    /// Classifies an abbreviation token. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_abbrev(token: &str) -> Self {
        match token.trim() {
            "n." => Self::Noun,
            "v." => Self::Verb,
            "adj." => Self::Adjective,
            "adv." => Self::Adverb,
            _ => Self::Unknown,
        }
    }

    /// Display suffix for rendering, e.g. `(v.)`. Empty for [`WordType::Unknown`].
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Noun => "n.",
            Self::Verb => "v.",
            Self::Adjective => "adj.",
            Self::Adverb => "adv.",
            Self::Unknown => "",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_abbreviations() {
        assert_eq!(WordType::from_abbrev("n."), WordType::Noun);
        assert_eq!(WordType::from_abbrev("v."), WordType::Verb);
        assert_eq!(WordType::from_abbrev("adj."), WordType::Adjective);
        assert_eq!(WordType::from_abbrev("adv."), WordType::Adverb);
    }

    #[test]
    fn test_token_is_trimmed_before_matching() {
        assert_eq!(WordType::from_abbrev("  v.\n"), WordType::Verb);
        assert_eq!(WordType::from_abbrev("\tadj. "), WordType::Adjective);
    }

    #[test]
    fn test_unrecognized_tokens_are_unknown() {
        assert_eq!(WordType::from_abbrev(""), WordType::Unknown);
        assert_eq!(WordType::from_abbrev("prep."), WordType::Unknown);
        assert_eq!(WordType::from_abbrev("noun"), WordType::Unknown);
        assert_eq!(WordType::from_abbrev("V."), WordType::Unknown);
    }

    #[test]
    fn test_display_suffixes() {
        assert_eq!(WordType::Noun.suffix(), "n.");
        assert_eq!(WordType::Verb.suffix(), "v.");
        assert_eq!(WordType::Adjective.suffix(), "adj.");
        assert_eq!(WordType::Adverb.suffix(), "adv.");
        assert_eq!(WordType::Unknown.suffix(), "");
    }

    #[test]
    fn test_config_names_deserialize() {
        #[derive(serde::Deserialize)]
        struct Doc {
            types: Vec<WordType>,
        }

        let doc: Doc =
            toml::from_str("types = [\"noun\", \"verb\", \"adjective\", \"adverb\", \"unknown\"]")
                .unwrap();
        assert_eq!(doc.types, WordType::ALL);
    }
}
