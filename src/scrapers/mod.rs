//! Document extraction contract and scrapers
//!
//! A [`Scraper`] provides five extractors over a parsed HTML document. The
//! provided [`Scraper::scrape`] method composes them into an [`Article`] whose
//! `url` is left empty; the crawler fills it in after fetching.
//!
//! Domain-specific scrapers implement the trait and delegate to
//! [`DefaultScraper`] for the extractors they do not need to change, then get
//! registered in a [`ScraperRegistry`].

mod default;
mod registry;
mod time;

pub use default::DefaultScraper;
pub use registry::ScraperRegistry;
pub use time::parse_datetime;

pub use crate::url::DomainMatcher;

use crate::models::Article;
use chrono::{DateTime, Utc};
use scraper::Html;
use thiserror::Error;

/// Errors raised while extracting an article from a document
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Document has neither heading nor title elements")]
    MissingHeadline,
}

/// The extraction contract every document scraper implements
pub trait Scraper: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Extracts the article headline
    fn extract_headline(&self, document: &Html) -> Result<String, ScrapeError>;

    /// Aggregates body paragraphs of at least `min_chars` characters
    fn extract_main_text(&self, document: &Html, min_chars: usize) -> String;

    /// Extracts the publish timestamp (best effort)
    fn extract_date(&self, document: &Html) -> DateTime<Utc>;

    /// Extracts every outbound reference in document order
    fn extract_all_links(&self, document: &Html) -> Vec<String>;

    /// Extracts the outbound references that carry a network location
    fn extract_absolute_links(&self, document: &Html) -> Vec<String>;

    /// Parses `document` and runs every extractor once
    ///
    /// The returned article has an empty `url`.
    fn scrape(&self, document: &str, min_text_length: usize) -> Result<Article, ScrapeError> {
        let document = Html::parse_document(document);

        Ok(Article {
            url: String::new(),
            headline: self.extract_headline(&document)?,
            main_text: self.extract_main_text(&document, min_text_length),
            published_at: self.extract_date(&document),
            all_links: self.extract_all_links(&document),
            absolute_links: self.extract_absolute_links(&document),
        })
    }
}
