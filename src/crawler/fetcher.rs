//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client from configuration
//! - GET requests for page content
//! - Fixed-delay retry on any failure

use crate::config::Config;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors returned by the fetcher
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Giving up on {url} after {attempts} attempts: {last_error}")]
    Exhausted {
        url: String,
        attempts: u32,
        last_error: String,
    },
}

/// Builds an HTTP client with the configured user agent and timeout
///
/// Without either setting the client keeps reqwest's defaults: its own
/// headers and no overall request timeout.
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build()
}

/// Fetches documents with bounded, fixed-delay retry
///
/// # Retry Logic
///
/// Transport errors, timeouts and non-success HTTP statuses are all treated
/// the same: the failure is logged, the fetcher sleeps `retry_delay`, and
/// tries again. After `max_retries + 1` attempts in total the fetch fails
/// with [`FetchError::Exhausted`]. There is no backoff.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl Fetcher {
    pub fn new(client: Client, max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            client,
            max_retries,
            retry_delay,
        }
    }

    /// Builds a fetcher from the retry settings and client options in `config`
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            build_http_client(config)?,
            config.max_retries,
            config.retry_delay(),
        ))
    }

    /// Total number of attempts a single fetch may make
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Fetches `url` and returns the response body as text
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let attempts = self.max_attempts();
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            match self.try_fetch(url).await {
                Ok(body) => {
                    if attempt > 1 {
                        tracing::debug!("Fetched {} on attempt {}", url, attempt);
                    }
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(
                        "Fetch attempt {}/{} for {} failed: {}",
                        attempt,
                        attempts,
                        url,
                        e
                    );
                    last_error = e.to_string();

                    if attempt < attempts {
                        tokio::time::sleep(self.retry_delay).await;
                    }
                }
            }
        }

        Err(FetchError::Exhausted {
            url: url.to_string(),
            attempts,
            last_error,
        })
    }

    async fn try_fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await
    }
}
