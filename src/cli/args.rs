use clap::Parser;

use crate::extract::WordType;

#[derive(Parser, Debug)]
#[command(name = "tureng")]
#[command(about = "English-Turkish dictionary lookup from the command line")]
#[command(version)]
pub struct Args {
    /// Term to look up; multiple words are joined into one query
    #[arg(required = true)]
    pub terms: Vec<String>,

    /// Maximum number of translations to display
    #[arg(short = 'c', long = "count", env = "TURENG_DISPLAY_COUNT")]
    pub count: Option<usize>,

    /// Only include noun entries
    #[arg(short = 'n', long)]
    pub nouns: bool,

    /// Only include verb entries
    #[arg(short = 'v', long)]
    pub verbs: bool,

    /// Only include adjective entries
    #[arg(long = "adj")]
    pub adjectives: bool,

    /// Only include adverb entries
    #[arg(long = "adv")]
    pub adverbs: bool,
}

impl Args {
    /// The normalized query string: the positional terms, space-joined.
    #[must_use]
    pub fn query(&self) -> String {
        self.terms.join(" ")
    }

    /// Word types selected by include flags. Empty when no flag was given,
    /// which downstream resolution treats as "all types".
    #[must_use]
    pub fn type_filters(&self) -> Vec<WordType> {
        let mut types = Vec::new();

        if self.nouns {
            types.push(WordType::Noun);
        }
        if self.verbs {
            types.push(WordType::Verb);
        }
        if self.adjectives {
            types.push(WordType::Adjective);
        }
        if self.adverbs {
            types.push(WordType::Adverb);
        }

        types
    }
}
