// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
    if let Some(agent) = &config.user_agent {
        builder = builder.user_agent(agent);
    }
    Ok(builder.build()?)
}

/// Fetch a page body as text.
///
/// Non-success status codes are errors. The raw `reqwest` error is returned
/// so callers can attach the page role.
pub async fn fetch_text(client: &Client, url: &str) -> reqwest::Result<String> {
    client.get(url).send().await?.error_for_status()?.text().await
}
