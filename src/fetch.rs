//! Article fetching.
//!
//! One shared client, one GET per URL, no retries. Non-success statuses are
//! promoted to errors via `error_for_status`. A fetch failure is fatal for
//! that URL only; the pipeline warns and moves on to the next article.

use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::FetchConfig;

/// Why one article was abandoned.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Builds the shared HTTP client with the configured per-request timeout.
/// The timeout covers the whole request, connect through body.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetches one article and returns its raw HTML body.
pub async fn fetch_article(client: &Client, url: &str) -> Result<String, FetchError> {
    let url = Url::parse(url)?;
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
