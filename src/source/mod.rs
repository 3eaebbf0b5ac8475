//! Text sources feeding an index
//!
//! Reads files from disk, cuts them into words with a [`Tokenizer`], and
//! records the words under the file's path.

mod indexer;

use std::fs;
use std::path::Path;

use crate::config::SourceConfig;
use crate::error::{Result, TextIndexError};
use crate::tokenizer::Tokenizer;

pub use indexer::{IndexReport, TextFileIndexer};

/// Read a UTF-8 text file and return its words in reading order
pub fn read_words(path: &Path, tokenizer: &Tokenizer) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| TextIndexError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tokenizer.tokenize(&text))
}

/// Check whether `path` has one of the configured text extensions
///
/// The comparison ignores ASCII case.
pub fn is_text_file(path: &Path, config: &SourceConfig) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            config
                .extensions
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
}
