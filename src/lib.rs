pub mod config;
pub mod error;
pub mod index;
pub mod source;
pub mod tokenizer;

pub use config::{IndexSettings, SourceConfig, SplitMode, TokenizerConfig};
pub use error::{Result, TextIndexError};
pub use index::{Locations, SimpleIndex, WordIndex, Words};
pub use source::{IndexReport, TextFileIndexer};
pub use tokenizer::Tokenizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
