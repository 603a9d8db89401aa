use anyhow::{Context, Result};
use reqwest::Client;
use tracing::info;

/// Fetch a support page and return its raw text body.
///
/// Transport errors are fatal for the whole run; a non-2xx status is not
/// special-cased here and simply fails later when the payload markers are
/// missing from the body.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    info!("Fetching {}", url);
    client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}
