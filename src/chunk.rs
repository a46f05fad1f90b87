//! Sliding-window token chunker.
//!
//! Splits flat article text into overlapping windows of whitespace-delimited
//! tokens. Window `k` covers tokens `[k*(window-overlap), k*(window-overlap)
//! + window)`; the final window may be shorter. Chunk ids are deterministic,
//! derived from the document id and chunk index, so re-chunking the same
//! document yields the same ids.

use anyhow::{bail, Result};
use sha2::{Digest, Sha256};

/// Hex characters kept from the SHA-256 digest for a chunk id.
const CHUNK_ID_LEN: usize = 16;

/// Validated sliding-window geometry.
///
/// `overlap` must stay below `window` so each step advances by at least one
/// token and the split terminates.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    window: usize,
    overlap: usize,
}

impl Chunker {
    pub fn new(window: usize, overlap: usize) -> Result<Self> {
        if window == 0 {
            bail!("chunk window must be > 0");
        }
        if overlap >= window {
            bail!(
                "chunk overlap ({}) must be smaller than the window ({})",
                overlap,
                window
            );
        }
        Ok(Self { window, overlap })
    }

    /// Lazily splits `text` into overlapping token windows.
    ///
    /// The sequence is pure: splitting the same text twice yields identical
    /// chunks, and dropping the iterator midway loses nothing but the
    /// remaining chunks. Empty text yields no chunks at all.
    pub fn split<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            tokens: text.split_whitespace().collect(),
            window: self.window,
            step: self.window - self.overlap,
            start: 0,
        }
    }
}

/// Iterator over space-joined token windows. See [`Chunker::split`].
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    tokens: Vec<&'a str>,
    window: usize,
    step: usize,
    start: usize,
}

impl Iterator for Chunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.start >= self.tokens.len() {
            return None;
        }
        let end = (self.start + self.window).min(self.tokens.len());
        let chunk = self.tokens[self.start..end].join(" ");
        self.start += self.step;
        Some(chunk)
    }
}

/// Deterministic chunk id: first [`CHUNK_ID_LEN`] hex characters of SHA-256
/// over `"{document_id}-{index}"`.
pub fn chunk_id(document_id: &str, index: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}-{}", document_id, index).as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..CHUNK_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_tokens(n: usize) -> String {
        (0..n).map(|i| format!("t{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_three_hundred_tokens_two_chunks() {
        // 300 tokens with the default 250/50 geometry: the second window
        // starts at token 200 and the third would start at 400, past the end.
        let chunker = Chunker::new(250, 50).unwrap();
        let text = numbered_tokens(300);
        let chunks: Vec<String> = chunker.split(&text).collect();
        assert_eq!(chunks.len(), 2);

        let tokens: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(chunks[0], tokens[0..250].join(" "));
        assert_eq!(chunks[1], tokens[200..300].join(" "));
        assert_eq!(chunks[1].split_whitespace().count(), 100);
    }

    #[test]
    fn test_window_sized_text_still_gets_tail_chunk() {
        // Exactly 250 tokens: the second start (200) is still inside the
        // text, so a short tail chunk of pure overlap is emitted.
        let chunker = Chunker::new(250, 50).unwrap();
        let text = numbered_tokens(250);
        let chunks: Vec<String> = chunker.split(&text).collect();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].split_whitespace().count(), 50);
    }

    #[test]
    fn test_step_sized_text_single_chunk() {
        let chunker = Chunker::new(250, 50).unwrap();
        let text = numbered_tokens(200);
        let chunks: Vec<String> = chunker.split(&text).collect();
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn test_consecutive_chunks_share_overlap() {
        let chunker = Chunker::new(5, 2).unwrap();
        let text = numbered_tokens(10);
        let chunks: Vec<String> = chunker.split(&text).collect();
        assert_eq!(chunks.len(), 4);

        let first: Vec<&str> = chunks[0].split_whitespace().collect();
        let second: Vec<&str> = chunks[1].split_whitespace().collect();
        assert_eq!(&first[3..], &second[..2]);
    }

    #[test]
    fn test_every_token_is_covered() {
        let chunker = Chunker::new(7, 3).unwrap();
        let text = numbered_tokens(53);
        let chunks: Vec<String> = chunker.split(&text).collect();

        let mut seen: std::collections::HashSet<String> = std::collections::HashSet::new();
        for chunk in &chunks {
            seen.extend(chunk.split_whitespace().map(str::to_string));
        }
        for i in 0..53 {
            assert!(seen.contains(&format!("t{}", i)), "missing token t{}", i);
        }

        assert!(chunks[0].starts_with("t0 "));
        assert!(chunks[chunks.len() - 1].ends_with("t52"));
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = Chunker::new(250, 50).unwrap();
        assert_eq!(chunker.split("").count(), 0);
        assert_eq!(chunker.split("   \n\t  ").count(), 0);
    }

    #[test]
    fn test_single_token() {
        let chunker = Chunker::new(250, 50).unwrap();
        let chunks: Vec<String> = chunker.split("alone").collect();
        assert_eq!(chunks, vec!["alone".to_string()]);
    }

    #[test]
    fn test_split_is_restartable() {
        let chunker = Chunker::new(10, 4).unwrap();
        let text = numbered_tokens(37);
        let first: Vec<String> = chunker.split(&text).collect();
        let second: Vec<String> = chunker.split(&text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(Chunker::new(0, 0).is_err());
        assert!(Chunker::new(250, 250).is_err());
        assert!(Chunker::new(100, 250).is_err());
        assert!(Chunker::new(250, 50).is_ok());
        assert!(Chunker::new(1, 0).is_ok());
    }

    #[test]
    fn test_chunk_id_shape_and_determinism() {
        let id = chunk_id("0a1b2c", 0);
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(id, chunk_id("0a1b2c", 0));
        assert_ne!(id, chunk_id("0a1b2c", 1));
        assert_ne!(id, chunk_id("9z8y7x", 0));
    }
}
