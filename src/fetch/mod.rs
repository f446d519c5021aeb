//! One-shot loading of the survey dataset from a URL or a local path.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::parser::parse_records;
use crate::record::Record;

/// Issues a GET for `url` and returns the response body.
///
/// # Errors
///
/// Fails on an unparseable URL, a transport error, or a non-success status.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse().with_context(|| format!("Invalid dataset URL '{url}'"))?,
    );

    let resp = client.execute(req).await?;
    if !resp.status().is_success() {
        return Err(anyhow!("Dataset request returned status {}", resp.status()));
    }

    Ok(resp.bytes().await?.to_vec())
}

/// Returns `true` when `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Loads raw dataset bytes from a local file path or over HTTP.
#[tracing::instrument(fields(source = %source))]
pub async fn load_bytes(source: &str) -> Result<Vec<u8>> {
    let bytes = if is_remote(source) {
        let client = BasicClient::new()?;
        fetch_bytes(&client, source).await?
    } else {
        tokio::fs::read(source)
            .await
            .with_context(|| format!("Failed to read dataset '{source}'"))?
    };
    debug!(bytes = bytes.len(), "Dataset bytes received");
    Ok(bytes)
}

/// Loads and parses the full dataset. Resolves once, before any aggregation.
pub async fn load_records(source: &str) -> Result<Vec<Record>> {
    let bytes = load_bytes(source).await?;
    let records = parse_records(&bytes)?;
    info!(records = records.len(), "Dataset loaded");
    Ok(records)
}
