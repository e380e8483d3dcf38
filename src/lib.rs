//! Grawt: a depth-bounded article crawler
//!
//! This crate fetches web pages starting from a seed URL, extracts article-like
//! content through a pluggable scraper contract, and follows links that stay on
//! the seed's domain up to a depth limit. URLs that were already processed are
//! remembered across runs in a seen-URL store.

pub mod config;
pub mod crawler;
pub mod models;
pub mod scrapers;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Grawt operations
#[derive(Debug, Error)]
pub enum GrawtError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] crawler::FetchError),

    #[error("Scrape error: {0}")]
    Scrape(#[from] scrapers::ScrapeError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Seed URL has no network location: {url}")]
    InvalidSeed { url: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The config file did not exist and an empty one was created in its place
    #[error("Config file created at {}; fill it out and restart", path.display())]
    Created { path: std::path::PathBuf },
}

/// Result type alias for Grawt operations
pub type Result<T> = std::result::Result<T, GrawtError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::crawler::{CrawlStats, Crawler};
pub use crate::models::Article;
pub use crate::scrapers::{DefaultScraper, DomainMatcher, Scraper, ScraperRegistry};
