// src/status/http.rs
// =============================================================================
// Fetches each URL with a GET request and records the final status code.
//
// Key functionality:
// - Follows redirects (up to a limit) and reports the status at the end
// - Any failure (timeout, DNS, refused connection, bad URL) is status 0
// - Runs requests concurrently but returns results in input order
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Streams: futures' buffered() keeps N requests in flight at once
// =============================================================================

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// How the auditor talks to the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Requests allowed in flight at the same time
    pub concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// Redirects followed before giving up on a URL
    pub max_redirects: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            concurrency: 10,
            timeout: Duration::from_secs(10),
            max_redirects: 10,
        }
    }
}

/// Outcome of requesting one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// The URL exactly as it appeared in the input
    pub url: String,
    /// Final HTTP status code, or 0 when no response was received
    pub status: u16,
    /// Why no response was received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusRecord {
    /// A URL is broken when it produced no response or a 4xx/5xx one
    pub fn is_broken(&self) -> bool {
        self.status == 0 || self.status >= 400
    }

    fn failed(url: String, message: String) -> Self {
        StatusRecord {
            url,
            status: 0,
            message: Some(message),
        }
    }
}

/// Requests every URL and returns one record per URL, in input order
pub async fn check_statuses(urls: Vec<String>, config: &CheckConfig) -> Result<Vec<StatusRecord>> {
    // One client for all requests so connections get pooled
    let client = Client::builder()
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .build()
        .context("failed to create HTTP client")?;

    let futures = urls.into_iter().map(|url| {
        let client = client.clone();
        async move { check_single_url(&client, url).await }
    });

    // buffered (not buffer_unordered) so output lines up with the input
    let records: Vec<StatusRecord> = stream::iter(futures)
        .buffered(config.concurrency.max(1))
        .collect()
        .await;

    Ok(records)
}

async fn check_single_url(client: &Client, url: String) -> StatusRecord {
    if let Err(e) = Url::parse(&url) {
        tracing::warn!(%url, error = %e, "skipping invalid URL");
        return StatusRecord::failed(url, format!("invalid URL: {}", e));
    }

    match client.get(url.as_str()).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            tracing::info!(%url, status, "checked");
            StatusRecord {
                url,
                status,
                message: None,
            }
        }
        Err(error) => {
            let message = describe_error(&error);
            tracing::warn!(%url, %message, "request failed");
            StatusRecord::failed(url, message)
        }
    }
}

// Turns a reqwest error into a short human-readable reason
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        "connection failed".to_string()
    } else {
        error.to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered?
//    - Both keep up to N futures running at the same time
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order the futures were created
//    - The output CSV must line up with the input, so we use buffered
//
// 2. Why status 0 for failures?
//    - Every input URL gets exactly one output row
//    - 0 is never a real HTTP status, so it can't be confused with one
// -----------------------------------------------------------------------------
