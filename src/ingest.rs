//! Build pipeline orchestration.
//!
//! Coordinates the full build flow: fetch → clean → chunk → write, strictly
//! in list order with one request in flight at a time. Per-article failures
//! (fetch errors, thin content) are non-fatal: the URL is warned and
//! skipped, and the run continues. Filesystem and configuration errors
//! abort the run. The manifest is accumulated in memory and written once,
//! after the last document.

use anyhow::Result;
use uuid::Uuid;

use crate::chunk::{chunk_id, Chunker};
use crate::clean::{clean_html, derive_title, MIN_CONTENT_CHARS};
use crate::config::Config;
use crate::fetch::{build_client, fetch_article};
use crate::models::{ChunkMetadata, ChunkRecord, Document, ManifestEntry};
use crate::progress::{BuildProgressEvent, BuildProgressReporter};
use crate::write::CorpusWriter;

/// What a build run did. Returned to callers; the CLI prints it.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub documents: usize,
    pub chunks: usize,
    /// Skipped URLs paired with the reason each was dropped.
    pub skipped: Vec<(String, String)>,
}

pub async fn run_build(
    config: &Config,
    urls: &[&str],
    dry_run: bool,
    limit: Option<usize>,
    reporter: &dyn BuildProgressReporter,
) -> Result<BuildSummary> {
    let chunker = Chunker::new(config.chunking.window, config.chunking.overlap)?;
    let client = build_client(&config.fetch)?;
    let writer = CorpusWriter::new(&config.output.root);

    let mut urls: Vec<&str> = urls.to_vec();
    if let Some(lim) = limit {
        urls.truncate(lim);
    }
    let total = urls.len() as u64;

    if !dry_run {
        writer.prepare()?;
        if writer.copy_aliases(&config.output.aliases_template)? {
            println!(
                "copied {} -> {}",
                config.output.aliases_template.display(),
                writer.root().join("config").join("aliases.yaml").display()
            );
        }
    }

    let mut manifest: Vec<ManifestEntry> = Vec::new();
    let mut chunks_written = 0usize;
    let mut skipped: Vec<(String, String)> = Vec::new();

    for (i, url) in urls.iter().enumerate() {
        reporter.report(BuildProgressEvent::Fetching {
            url: url.to_string(),
            n: i as u64 + 1,
            total,
        });

        let html = match fetch_article(&client, url).await {
            Ok(html) => html,
            Err(e) => {
                eprintln!("warning: skipping {} ({})", url, e);
                skipped.push((url.to_string(), e.to_string()));
                continue;
            }
        };

        let body = clean_html(&html);
        let body_chars = body.chars().count();
        if body_chars < MIN_CONTENT_CHARS {
            eprintln!(
                "warning: skipping {} (content too short: {} chars)",
                url, body_chars
            );
            skipped.push((
                url.to_string(),
                format!("content too short ({} chars)", body_chars),
            ));
            continue;
        }

        let doc = Document {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            title: derive_title(&body),
            body,
        };

        let mut chunks: Vec<ChunkRecord> = Vec::new();
        let mut metadata: Vec<ChunkMetadata> = Vec::new();
        for (index, text) in chunker.split(&doc.body).enumerate() {
            let id = chunk_id(&doc.id, index);
            metadata.push(ChunkMetadata::for_chunk(&id, &doc));
            chunks.push(ChunkRecord { chunk_id: id, text });
        }
        chunks_written += chunks.len();

        reporter.report(BuildProgressEvent::Chunked {
            url: url.to_string(),
            chunks: chunks.len() as u64,
        });

        let path = if dry_run {
            format!("documents/{}/chunks.jsonl", doc.id)
        } else {
            writer.write_document(&doc, &chunks, &metadata)?
        };

        manifest.push(ManifestEntry {
            doc_uuid: doc.id.clone(),
            title: doc.title.clone(),
            source: doc.url.clone(),
            path,
        });
    }

    if !dry_run {
        writer.write_manifest(&manifest)?;
    }

    if dry_run {
        println!("build (dry-run)");
        println!("  documents: {}", manifest.len());
        println!("  chunks: {}", chunks_written);
        println!("  skipped: {}", skipped.len());
    } else {
        println!("build");
        println!("  documents written: {}", manifest.len());
        println!("  chunks written: {}", chunks_written);
        println!("  skipped: {}", skipped.len());
        println!("  corpus root: {}", writer.root().display());
        println!("ok");
    }

    Ok(BuildSummary {
        documents: manifest.len(),
        chunks: chunks_written,
        skipped,
    })
}
