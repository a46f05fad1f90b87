//! Corpus tree writer.
//!
//! Owns the on-disk layout: a corpus root holding `manifest.json`, an
//! optional `config/aliases.yaml` sidecar, and one directory per document
//! with the markdown article plus the aligned chunk and metadata JSONL
//! files. Filesystem errors here abort the run; partially written documents
//! are never cleaned up and simply stay on disk without a manifest entry.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{ChunkMetadata, ChunkRecord, Document, ManifestEntry};

pub struct CorpusWriter {
    root: PathBuf,
}

impl CorpusWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the corpus skeleton (`documents/`, `config/`). Idempotent,
    /// so re-runs into an existing corpus root just reuse it.
    pub fn prepare(&self) -> Result<()> {
        fs::create_dir_all(self.root.join("documents"))?;
        fs::create_dir_all(self.root.join("config"))?;
        Ok(())
    }

    /// Copies the aliases sidecar into the corpus verbatim when the template
    /// exists. The file is opaque to this pipeline; nothing parses it.
    /// Returns whether a copy happened.
    pub fn copy_aliases(&self, template: &Path) -> Result<bool> {
        if !template.exists() {
            return Ok(false);
        }
        fs::copy(template, self.root.join("config").join("aliases.yaml")).with_context(|| {
            format!("Failed to copy aliases template {}", template.display())
        })?;
        Ok(true)
    }

    /// Writes one document's three artifacts and returns the manifest path
    /// for its chunk file (`documents/<id>/chunks.jsonl`, forward slashes
    /// on every platform).
    pub fn write_document(
        &self,
        doc: &Document,
        chunks: &[ChunkRecord],
        metadata: &[ChunkMetadata],
    ) -> Result<String> {
        let dir = self.root.join("documents").join(&doc.id);
        fs::create_dir_all(&dir)?;

        let article = format!("# {}\n\n{}\n\n*(Source: {})*", doc.title, doc.body, doc.url);
        fs::write(dir.join("article.md"), article)?;

        write_jsonl(&dir.join("chunks.jsonl"), chunks)?;
        write_jsonl(&dir.join("metadata.jsonl"), metadata)?;

        Ok(format!("documents/{}/chunks.jsonl", doc.id))
    }

    /// Writes the manifest as a pretty-printed JSON array, replacing any
    /// manifest a previous run left behind.
    pub fn write_manifest(&self, entries: &[ManifestEntry]) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(self.root.join("manifest.json"), json)?;
        Ok(())
    }
}

/// One compact JSON object per line, newline-terminated.
fn write_jsonl<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    for row in rows {
        let line = serde_json::to_string(row)?;
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
