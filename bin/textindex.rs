use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use textindex::{
    IndexReport, IndexSettings, SimpleIndex, SourceConfig, SplitMode, TextFileIndexer,
    TextIndexError, TokenizerConfig, WordIndex,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "textindex")]
#[command(about = "Index the words found in text files", long_about = None)]
struct Args {
    /// Files or directories to index
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Comma-separated file extensions read from directories
    #[arg(
        long,
        env = "TEXTINDEX_EXTENSIONS",
        value_delimiter = ',',
        default_value = "txt,text,md"
    )]
    extensions: Vec<String>,

    /// Minimum word length in characters
    #[arg(long, env = "TEXTINDEX_MIN_LENGTH", default_value = "1")]
    min_length: usize,

    /// Maximum word length in characters, unbounded when omitted
    #[arg(long, env = "TEXTINDEX_MAX_LENGTH")]
    max_length: Option<usize>,

    /// Keep the original case of words
    #[arg(long)]
    no_lowercase: bool,

    /// Word splitting (non-word, unicode)
    #[arg(long, env = "TEXTINDEX_SPLIT", default_value = "non-word")]
    split: String,

    /// Follow symbolic links while walking directories
    #[arg(long)]
    follow_links: bool,

    /// Maximum directory depth to descend
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the locations containing this word instead of the whole index
    #[arg(long)]
    word: Option<String>,

    /// Print the index as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    info!("Starting textindex v{}", textindex::VERSION);

    let split_mode = SplitMode::parse(&args.split).unwrap_or_else(|| {
        warn!("Unknown split mode '{}', using 'non-word'", args.split);
        SplitMode::NonWord
    });

    let settings = IndexSettings {
        tokenizer_config: TokenizerConfig {
            lowercase: !args.no_lowercase,
            split_mode,
            min_token_length: args.min_length,
            max_token_length: args.max_length,
        },
        source_config: SourceConfig::default()
            .with_extensions(&args.extensions)
            .with_follow_links(args.follow_links)
            .with_max_depth(args.max_depth),
    };

    let indexer = TextFileIndexer::new(&settings).context("invalid settings")?;
    let mut index = WordIndex::new();
    let mut report = IndexReport::default();

    for path in &args.paths {
        report += indexer
            .index_path(&mut index, path)
            .with_context(|| format!("failed to index {}", path.display()))?;
    }

    info!(
        "Indexed {} file(s), {} word(s), {} skipped",
        report.files, report.words, report.skipped
    );

    if let Some(word) = &args.word {
        if word.trim().is_empty() {
            return Err(
                TextIndexError::InvalidRequest("--word must not be blank".to_string()).into(),
            );
        }

        let word = if settings.tokenizer_config.lowercase {
            word.to_lowercase()
        } else {
            word.clone()
        };

        for location in index.locations() {
            if index.contains_word(location, &word) {
                println!("{}", location.display());
            }
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&index)?);
    } else {
        println!("{}", index);
    }

    Ok(())
}
