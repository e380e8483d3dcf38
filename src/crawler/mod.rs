//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with fixed-delay retry
//! - Per-URL visit states
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod state;

pub use coordinator::{CrawlStats, Crawler};
pub use fetcher::{build_http_client, FetchError, Fetcher};
pub use state::VisitState;

use crate::config::Config;
use crate::models::Article;
use crate::GrawtError;
use std::collections::HashSet;

/// Runs a complete crawl operation
///
/// This is the main entry point for a one-off crawl. It will:
/// 1. Open the seen-URL store named in the configuration
/// 2. Build the HTTP client and default scraper registry
/// 3. Crawl from `seed_url` down to `max_depth`
/// 4. Persist the seen-URL store
///
/// # Returns
///
/// * `Ok(HashSet<Article>)` - Articles scraped during this crawl
/// * `Err(GrawtError)` - Setup failed or the store could not be written
pub async fn crawl(
    config: Config,
    seed_url: &str,
    max_depth: u32,
) -> Result<HashSet<Article>, GrawtError> {
    Crawler::new(config)?.crawl_site(seed_url, max_depth).await
}
