//! HTTP client for the stats API

use reqwest::Client;

use super::FetchError;
use super::envelope::interpret_response;
use crate::stats::StatsRecord;

/// Public stats API host
pub const DEFAULT_BASE_URL: &str = "https://leetcode-stats-api.herokuapp.com";

/// Build the lookup URL for a username
pub fn endpoint_url(base_url: &str, username: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), username)
}

/// Async stats API client
///
/// One `fetch` is exactly one GET: no headers, no body, no retries, no timeout.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Use a preconfigured reqwest client (proxy, TLS settings)
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch and interpret the statistics for `username`
    pub async fn fetch(&self, username: &str) -> Result<StatsRecord, FetchError> {
        let url = endpoint_url(&self.base_url, username);

        #[cfg(debug_assertions)]
        log::debug!("Fetching stats from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Unexpected(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport {
                username: username.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Unexpected(format!("Failed to read response: {}", e)))?;

        interpret_response(username, status.as_u16(), &body)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
