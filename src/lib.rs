//! # MCP Corpus Builder
//!
//! A small pipeline that turns a fixed list of web articles into a
//! retrieval-ready corpus for MCP clients.
//!
//! Each article is fetched once, stripped of page chrome down to flat text,
//! split into overlapping token windows, and written to disk as markdown
//! plus aligned chunk and metadata JSONL files. A single `manifest.json`
//! indexes every document so clients can discover the corpus without
//! walking the tree.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌────────────────┐
//! │ Fetcher  │──▶│ Cleaner  │──▶│ Chunker  │──▶│     Writer     │
//! │ reqwest  │   │ scraper  │   │ windows  │   │ md/jsonl/json  │
//! └──────────┘   └──────────┘   └──────────┘   └───────┬────────┘
//!                                                      ▼
//!                                                 mcp-corpus/
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! corpus build                  # fetch articles, write mcp-corpus/
//! corpus build --dry-run        # fetch and count, write nothing
//! corpus build --limit 2        # only the first two articles
//! corpus sources                # show the compiled-in article list
//! corpus stats                  # inspect a previously built corpus
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`sources`] | The compiled-in article URL list |
//! | [`fetch`] | HTTP fetching |
//! | [`clean`] | HTML-to-text cleaning |
//! | [`chunk`] | Sliding-window token chunking |
//! | [`write`] | Corpus tree writing |
//! | [`ingest`] | Build pipeline orchestration |
//! | [`progress`] | Build progress reporting |
//! | [`stats`] | Corpus inspection |

pub mod chunk;
pub mod clean;
pub mod config;
pub mod fetch;
pub mod ingest;
pub mod models;
pub mod progress;
pub mod sources;
pub mod stats;
pub mod write;
