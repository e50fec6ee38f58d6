//! HTTP fetcher
//!
//! Thin wrapper around reqwest: one shared client per run, one
//! status-checked GET per page. Failures are returned to the caller,
//! which logs and skips the URL; there is no retry.

use crate::{Result, ScrapeError};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("breeder-scout/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by all pipeline workers.
///
/// The target site serves plain HTTP, so `https_only` is deliberately
/// not set.
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body as a string.
///
/// Any transport error or non-success status is an error; the caller
/// decides whether it is fatal (it never is, for pipeline workers).
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScrapeError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| ScrapeError::Http {
        url: url.to_string(),
        source,
    })
}
