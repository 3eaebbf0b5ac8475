use std::sync::OnceLock;

use indexmap::IndexSet;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{SplitMode, TokenizerConfig};
use crate::error::Result;

fn non_word() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"\W+").expect("non-word pattern is valid"))
}

/// Text tokenizer producing the words fed into an index
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new tokenizer from configuration
    pub fn new(config: &TokenizerConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Create a tokenizer after checking the configuration
    pub fn try_new(config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenize text into a vector of words, in reading order
    ///
    /// Empty pieces (e.g. from leading punctuation) are never produced.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let pieces: Box<dyn Iterator<Item = &str> + '_> = match self.config.split_mode {
            SplitMode::NonWord => Box::new(non_word().split(text)),
            SplitMode::Unicode => Box::new(text.unicode_words()),
        };

        pieces
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                if self.config.lowercase {
                    piece.to_lowercase()
                } else {
                    piece.to_string()
                }
            })
            .filter(|token| self.accepts_length(token))
            .collect()
    }

    /// Get the distinct words of `text` in first-seen order
    pub fn unique_terms(&self, text: &str) -> IndexSet<String> {
        self.tokenize(text).into_iter().collect()
    }

    fn accepts_length(&self, token: &str) -> bool {
        let len = token.chars().count();
        len >= self.config.min_token_length
            && self.config.max_token_length.map_or(true, |max| len <= max)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(&TokenizerConfig::default())
    }
}
