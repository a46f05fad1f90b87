use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_aliases_template")]
    pub aliases_template: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            aliases_template: default_aliases_template(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("mcp-corpus")
}
fn default_aliases_template() -> PathBuf {
    PathBuf::from("config/aliases.yaml")
}

#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_overlap")]
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            overlap: default_overlap(),
        }
    }
}

fn default_window() -> usize {
    250
}
fn default_overlap() -> usize {
    50
}

/// Loads configuration from `path`. A missing file is not an error: the
/// built-in defaults apply, so the tool runs with no config at all.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")?
    } else {
        Config::default()
    };

    // Validate chunking
    if config.chunking.window == 0 {
        anyhow::bail!("chunking.window must be > 0");
    }
    if config.chunking.overlap >= config.chunking.window {
        anyhow::bail!(
            "chunking.overlap ({}) must be smaller than chunking.window ({})",
            config.chunking.overlap,
            config.chunking.window
        );
    }

    // Validate fetch
    if config.fetch.timeout_secs == 0 {
        anyhow::bail!("fetch.timeout_secs must be > 0");
    }

    Ok(config)
}
