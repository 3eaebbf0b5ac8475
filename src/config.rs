use serde::{Deserialize, Serialize};

use crate::error::{Result, TextIndexError};

/// Settings for building an index from text sources
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IndexSettings {
    pub tokenizer_config: TokenizerConfig,
    pub source_config: SourceConfig,
}

impl IndexSettings {
    /// Validate every nested configuration
    pub fn validate(&self) -> Result<()> {
        self.tokenizer_config.validate()?;
        self.source_config.validate()
    }
}

/// How text is cut into words
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitMode {
    /// Split on runs of non-word characters
    #[default]
    NonWord,
    /// Split on Unicode word boundaries
    Unicode,
}

impl SplitMode {
    /// Parse a mode name as accepted on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "non-word" | "non_word" | "nonword" => Some(SplitMode::NonWord),
            "unicode" => Some(SplitMode::Unicode),
            _ => None,
        }
    }
}

/// Tokenizer configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenizerConfig {
    pub lowercase: bool,
    pub split_mode: SplitMode,
    /// Minimum token length in characters
    pub min_token_length: usize,
    /// Maximum token length in characters, unbounded when `None`
    pub max_token_length: Option<usize>,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            split_mode: SplitMode::NonWord,
            min_token_length: 1,
            max_token_length: None,
        }
    }
}

impl TokenizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_token_length == 0 {
            return Err(TextIndexError::InvalidConfig(
                "min_token_length must be at least 1".to_string(),
            ));
        }
        if let Some(max) = self.max_token_length {
            if self.min_token_length > max {
                return Err(TextIndexError::InvalidConfig(format!(
                    "min_token_length ({}) exceeds max_token_length ({})",
                    self.min_token_length, max
                )));
            }
        }
        Ok(())
    }
}

/// Which files are read when indexing a directory
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    /// File extensions treated as text, without the leading dot
    pub extensions: Vec<String>,
    pub follow_links: bool,
    /// Maximum directory depth to descend, unlimited when `None`
    pub max_depth: Option<usize>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "text".to_string(), "md".to_string()],
            follow_links: false,
            max_depth: None,
        }
    }
}

impl SourceConfig {
    /// Replace the accepted extensions
    ///
    /// Leading dots are stripped and blank entries dropped.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() {
            return Err(TextIndexError::InvalidConfig(
                "at least one file extension is required".to_string(),
            ));
        }
        Ok(())
    }
}
