//! Core data models used throughout the corpus builder.
//!
//! These types represent the documents, chunks, and manifest rows that flow
//! from fetch to disk.

use serde::{Deserialize, Serialize};

/// One fetched article after cleaning and titling. Built once per
/// successful fetch, immutable afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    /// Freshly minted v4 UUID. Never derived from the URL, so every run
    /// produces new ids and nothing deduplicates across runs.
    pub id: String,
    pub url: String,
    pub title: String,
    pub body: String,
}

/// One line of a document's `chunks.jsonl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    /// First 16 hex characters of SHA-256 over `"{document_id}-{index}"`.
    pub chunk_id: String,
    pub text: String,
}

/// One line of a document's `metadata.jsonl`, aligned one-to-one with
/// [`ChunkRecord`] by position and `chunk_id`.
///
/// Only `chunk_id`, `title`, and `source_url` carry real data. The rest are
/// fixed placeholders reserved for later enrichment and are never inferred
/// from page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub chunk_id: String,
    pub title: String,
    pub author: String,
    pub pub_date: String,
    pub page_no: Option<u32>,
    pub tags: Vec<String>,
    pub numeric: serde_json::Map<String, serde_json::Value>,
    pub source_url: String,
    pub masterformat: String,
}

impl ChunkMetadata {
    /// Author recorded until real byline extraction exists.
    pub const PLACEHOLDER_AUTHOR: &'static str = "Unknown";

    /// Builds the metadata row for one chunk of `doc`.
    pub fn for_chunk(chunk_id: &str, doc: &Document) -> Self {
        Self {
            chunk_id: chunk_id.to_string(),
            title: doc.title.clone(),
            author: Self::PLACEHOLDER_AUTHOR.to_string(),
            pub_date: String::new(),
            page_no: None,
            tags: Vec::new(),
            numeric: serde_json::Map::new(),
            source_url: doc.url.clone(),
            masterformat: String::new(),
        }
    }
}

/// One row of the corpus `manifest.json` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub doc_uuid: String,
    pub title: String,
    pub source: String,
    /// Corpus-relative path to the document's chunk file, always written
    /// with forward slashes regardless of platform.
    pub path: String,
}
