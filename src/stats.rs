//! Corpus statistics and health overview.
//!
//! Provides a quick summary of a built corpus tree: manifest totals,
//! per-document chunk and metadata line counts, and on-disk footprint.
//! Also surfaces document directories that no manifest entry references,
//! since the pipeline never cleans up after an aborted run. Used by
//! `corpus stats` to give confidence a build produced what it should.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use walkdir::WalkDir;

use crate::config::Config;
use crate::models::ManifestEntry;

/// Per-document breakdown of chunk and metadata line counts.
struct DocumentStats {
    doc_uuid: String,
    title: String,
    chunk_lines: usize,
    metadata_lines: usize,
}

/// Run the stats command: read the manifest and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let root = &config.output.root;
    let manifest_path = root.join("manifest.json");
    if !manifest_path.exists() {
        bail!(
            "no manifest at {} (run `corpus build` first)",
            manifest_path.display()
        );
    }

    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
    let manifest: Vec<ManifestEntry> =
        serde_json::from_str(&content).with_context(|| "Failed to parse manifest.json")?;

    let mut listed: HashSet<String> = HashSet::new();
    let mut docs: Vec<DocumentStats> = Vec::new();
    let mut total_chunks = 0usize;

    for entry in &manifest {
        listed.insert(entry.doc_uuid.clone());
        let doc_dir = root.join("documents").join(&entry.doc_uuid);
        let chunk_lines = count_lines(&doc_dir.join("chunks.jsonl"));
        let metadata_lines = count_lines(&doc_dir.join("metadata.jsonl"));
        total_chunks += chunk_lines;
        docs.push(DocumentStats {
            doc_uuid: entry.doc_uuid.clone(),
            title: entry.title.clone(),
            chunk_lines,
            metadata_lines,
        });
    }

    // Directories under documents/ that the manifest does not reference are
    // leftovers from earlier or aborted runs.
    let mut orphans: Vec<String> = Vec::new();
    let documents_dir = root.join("documents");
    if documents_dir.exists() {
        for dent in fs::read_dir(&documents_dir)? {
            let dent = dent?;
            if dent.file_type()?.is_dir() {
                let name = dent.file_name().to_string_lossy().to_string();
                if !listed.contains(&name) {
                    orphans.push(name);
                }
            }
        }
    }
    orphans.sort();

    let disk_bytes: u64 = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum();

    println!("Corpus Stats");
    println!("============");
    println!();
    println!("  Root:        {}", root.display());
    println!("  Size:        {}", format_bytes(disk_bytes));
    println!();
    println!("  Documents:   {}", manifest.len());
    println!("  Chunks:      {}", total_chunks);

    if !docs.is_empty() {
        println!();
        println!(
            "  {:<36} {:>6} {:>8}   {}",
            "DOCUMENT", "CHUNKS", "META", "TITLE"
        );
        println!("  {}", "-".repeat(76));
        for d in &docs {
            println!(
                "  {:<36} {:>6} {:>8}   {}",
                d.doc_uuid,
                d.chunk_lines,
                d.metadata_lines,
                truncate(&d.title, 28)
            );
        }
    }

    if !orphans.is_empty() {
        println!();
        println!("  Orphaned document dirs (no manifest entry):");
        for orphan in &orphans {
            println!("    documents/{}", orphan);
        }
    }

    println!();
    Ok(())
}

/// Non-empty line count of a JSONL file, 0 when the file is missing.
fn count_lines(path: &Path) -> usize {
    fs::read_to_string(path)
        .map(|s| s.lines().filter(|l| !l.trim().is_empty()).count())
        .unwrap_or(0)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn count_lines_skips_blanks_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.jsonl");
        fs::write(&path, "{\"a\":1}\n\n{\"a\":2}\n").unwrap();
        assert_eq!(count_lines(&path), 2);
        assert_eq!(count_lines(&dir.path().join("missing.jsonl")), 0);
    }

    #[test]
    fn truncate_respects_char_count() {
        assert_eq!(truncate("short", 28), "short");
        assert_eq!(truncate(&"x".repeat(40), 28).chars().count(), 28);
    }
}
