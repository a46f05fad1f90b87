//! Build progress reporting.
//!
//! Reports observable progress during `corpus build` so users see which
//! article is in flight and how many remain. Progress is emitted on
//! **stderr** so stdout remains parseable for scripts.

use std::io::Write;

/// A single progress event for a build run.
#[derive(Clone, Debug)]
pub enum BuildProgressEvent {
    /// About to fetch article n of total.
    Fetching { url: String, n: u64, total: u64 },
    /// Article n was cleaned and split; counts known.
    Chunked { url: String, chunks: u64 },
}

/// Reports build progress. Implementations write to stderr (human or JSON).
pub trait BuildProgressReporter: Send + Sync {
    /// Emit a progress event. Called from the build pipeline.
    fn report(&self, event: BuildProgressEvent);
}

/// Human-friendly progress on stderr: "build  fetching  3 / 10  https://...".
pub struct StderrProgress;

impl BuildProgressReporter for StderrProgress {
    fn report(&self, event: BuildProgressEvent) {
        let line = match &event {
            BuildProgressEvent::Fetching { url, n, total } => {
                let n_fmt = format_number(*n);
                let total_fmt = format_number(*total);
                format!("build  fetching  {} / {}  {}\n", n_fmt, total_fmt, url)
            }
            BuildProgressEvent::Chunked { url, chunks } => {
                format!("build  chunked   {} chunks  {}\n", format_number(*chunks), url)
            }
        };
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
        let _ = std::io::stderr().lock().flush();
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl BuildProgressReporter for JsonProgress {
    fn report(&self, event: BuildProgressEvent) {
        let obj = match &event {
            BuildProgressEvent::Fetching { url, n, total } => serde_json::json!({
                "event": "progress",
                "phase": "fetching",
                "url": url,
                "n": n,
                "total": total
            }),
            BuildProgressEvent::Chunked { url, chunks } => serde_json::json!({
                "event": "progress",
                "phase": "chunked",
                "url": url,
                "chunks": chunks
            }),
        };
        if let Ok(line) = serde_json::to_string(&obj) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
            let _ = std::io::stderr().lock().flush();
        }
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl BuildProgressReporter for NoProgress {
    fn report(&self, _event: BuildProgressEvent) {}
}

fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    /// Build a reporter for this mode. Caller can pass it to the pipeline.
    pub fn reporter(&self) -> Box<dyn BuildProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}
