//! # MCP Corpus Builder CLI (`corpus`)
//!
//! The `corpus` binary fetches a fixed list of construction-industry
//! articles, cleans them to flat text, splits them into overlapping token
//! windows, and writes a retrieval-ready corpus tree that MCP clients can
//! discover through its `manifest.json`.
//!
//! ## Usage
//!
//! ```bash
//! corpus --config ./config/corpus.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `corpus build` | Fetch every article and (re)build the corpus tree |
//! | `corpus sources` | List the compiled-in article URLs |
//! | `corpus stats` | Summarize a previously built corpus |
//!
//! ## Examples
//!
//! ```bash
//! # Build the corpus with defaults (writes ./mcp-corpus)
//! corpus build
//!
//! # See what a build would produce without writing anything
//! corpus build --dry-run
//!
//! # Only the first two articles, with JSON progress on stderr
//! corpus build --limit 2 --progress json
//!
//! # Inspect the result
//! corpus stats
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mcp_corpus_builder::progress::ProgressMode;
use mcp_corpus_builder::{config, ingest, sources, stats};

/// MCP Corpus Builder CLI.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. A missing file at the default location is fine; built-in defaults
/// apply. See `config/corpus.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "corpus",
    about = "Builds a retrieval-ready article corpus for MCP clients",
    version,
    long_about = "Fetches a fixed set of construction-industry articles, strips them to flat \
    text, splits the text into overlapping token windows, and writes markdown, JSONL chunks, \
    JSONL metadata, and a manifest.json that MCP clients use to discover the corpus."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/corpus.toml`. Output, fetch, and chunking
    /// settings are read from this file; a missing file means defaults.
    #[arg(long, global = true, default_value = "./config/corpus.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Fetch every configured article and (re)build the corpus tree.
    ///
    /// Articles are processed strictly in list order, one request at a
    /// time. A failed fetch or a too-short page is warned and skipped; the
    /// build continues with the rest. The manifest is rewritten at the end
    /// and lists only this run's documents.
    Build {
        /// Fetch, clean, and chunk, but write nothing; print counts.
        #[arg(long)]
        dry_run: bool,

        /// Maximum number of articles to process.
        #[arg(long)]
        limit: Option<usize>,

        /// Progress on stderr: `off`, `human`, or `json`.
        /// Defaults to `human` when stderr is a TTY, otherwise `off`.
        #[arg(long)]
        progress: Option<String>,
    },

    /// List the compiled-in article URLs.
    ///
    /// The article set is part of the binary; changing it means editing
    /// the source and rebuilding.
    Sources,

    /// Summarize a previously built corpus tree.
    ///
    /// Reads the manifest and reports document and chunk counts, on-disk
    /// size, and any document directories no manifest entry references.
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Build {
            dry_run,
            limit,
            progress,
        } => {
            let mode = match progress.as_deref() {
                None => ProgressMode::default_for_tty(),
                Some("off") => ProgressMode::Off,
                Some("human") => ProgressMode::Human,
                Some("json") => ProgressMode::Json,
                Some(other) => anyhow::bail!(
                    "Unknown progress mode: '{}'. Must be off, human, or json.",
                    other
                ),
            };
            let reporter = mode.reporter();
            ingest::run_build(&cfg, sources::ARTICLE_URLS, dry_run, limit, reporter.as_ref())
                .await?;
        }
        Commands::Sources => {
            sources::list_sources(&cfg)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
    }

    Ok(())
}
