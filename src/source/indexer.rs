use std::ops::AddAssign;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{is_text_file, read_words};
use crate::config::{IndexSettings, SourceConfig};
use crate::error::{Result, TextIndexError};
use crate::index::SimpleIndex;
use crate::tokenizer::Tokenizer;

/// Summary of one indexing run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    /// Files read successfully
    pub files: usize,
    /// Words newly stored in the index
    pub words: usize,
    /// Entries that could not be read
    pub skipped: usize,
}

impl AddAssign for IndexReport {
    fn add_assign(&mut self, other: Self) {
        self.files += other.files;
        self.words += other.words;
        self.skipped += other.skipped;
    }
}

/// Feeds text files into an index keyed by path
pub struct TextFileIndexer {
    tokenizer: Tokenizer,
    config: SourceConfig,
}

impl TextFileIndexer {
    /// Create an indexer, rejecting invalid settings
    pub fn new(settings: &IndexSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(&settings.tokenizer_config),
            config: settings.source_config.clone(),
        })
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub fn source_config(&self) -> &SourceConfig {
        &self.config
    }

    /// Add the words of a single file under its path
    ///
    /// Returns the number of newly stored words. A file without words leaves
    /// the index untouched.
    pub fn index_file<I>(&self, index: &mut I, path: &Path) -> Result<usize>
    where
        I: SimpleIndex<PathBuf>,
    {
        let words = read_words(path, &self.tokenizer)?;
        let total = words.len();
        let added = index.add_all(path.to_path_buf(), words);
        debug!(path = %path.display(), total, added, "indexed file");
        Ok(added)
    }

    /// Index a file, or every text file below a directory
    ///
    /// A file given directly is read whatever its extension. Inside a
    /// directory only files matching the configured extensions are read, in
    /// file-name order. Unreadable entries are logged and counted as skipped.
    pub fn index_path<I>(&self, index: &mut I, root: &Path) -> Result<IndexReport>
    where
        I: SimpleIndex<PathBuf>,
    {
        if !root.exists() {
            return Err(TextIndexError::SourceNotFound(root.to_path_buf()));
        }

        let mut report = IndexReport::default();
        if root.is_file() {
            report.words = self.index_file(index, root)?;
            report.files = 1;
            return Ok(report);
        }

        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();
        if let Some(depth) = self.config.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    report.skipped += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() || !is_text_file(entry.path(), &self.config) {
                continue;
            }

            match self.index_file(index, entry.path()) {
                Ok(added) => {
                    report.files += 1;
                    report.words += added;
                }
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "skipping file");
                    report.skipped += 1;
                }
            }
        }

        info!(
            root = %root.display(),
            files = report.files,
            words = report.words,
            skipped = report.skipped,
            "indexed directory"
        );
        Ok(report)
    }
}
