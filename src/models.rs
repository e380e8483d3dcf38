//! Article record produced by scraping one document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An article scraped from a single fetched document
///
/// The URL is the sole identity key: two articles compare and hash equal
/// whenever their `url` fields are equal, regardless of content.
///
/// The serialized (key-value) form uses the keys `url`, `headline`,
/// `maintext`, `datetime_`, `hrefs` and `netloc_links`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// The exact URL that was fetched; empty until the crawler fills it in
    pub url: String,

    pub headline: String,

    /// Qualifying paragraphs, each followed by a newline
    #[serde(rename = "maintext")]
    pub main_text: String,

    /// Earliest publish time found, or the scrape time if none parsed
    #[serde(rename = "datetime_")]
    pub published_at: DateTime<Utc>,

    /// Every anchor href in document order, duplicates preserved
    #[serde(rename = "hrefs")]
    pub all_links: Vec<String>,

    /// The subset of `all_links` carrying a network location (host[:port])
    #[serde(rename = "netloc_links")]
    pub absolute_links: Vec<String>,
}

impl Article {
    /// Converts the article into its key-value representation
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rebuilds an article from its key-value representation
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}
