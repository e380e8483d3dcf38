use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Grawt
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Location of the seen-URL store
    pub urls_file_path: String,

    /// Number of retries after the first failed fetch attempt
    pub max_retries: u32,

    /// Fixed delay between fetch attempts (seconds)
    pub url_retry_delay: f64,

    /// Minimum paragraph length (characters) for inclusion in the main text
    #[serde(default = "default_main_text_min_length")]
    pub main_text_min_length: usize,

    /// Whether an already-seen URL is a dead end for further traversal
    #[serde(default = "default_skip_links_of_seen")]
    pub skip_links_of_seen: bool,

    /// Optional per-request timeout (seconds)
    #[serde(default)]
    pub request_timeout: Option<f64>,

    /// Optional User-Agent header; the HTTP client default is used otherwise
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Config {
    /// Returns the retry delay as a `Duration`
    ///
    /// Negative or non-finite values collapse to zero; `validate` rejects them
    /// for configs loaded from disk.
    pub fn retry_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.url_retry_delay).unwrap_or(Duration::ZERO)
    }

    /// Returns the request timeout as a `Duration`, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

fn default_main_text_min_length() -> usize {
    150
}

fn default_skip_links_of_seen() -> bool {
    true
}
