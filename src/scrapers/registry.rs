//! Scraper selection by domain

use crate::scrapers::{DefaultScraper, Scraper};
use crate::url::DomainMatcher;

/// Ordered table of domain-specific scrapers with a default fallback
///
/// Entries are checked in registration order and the first matcher that
/// accepts the domain wins. When nothing matches, the default scraper is used.
pub struct ScraperRegistry {
    entries: Vec<(DomainMatcher, Box<dyn Scraper>)>,
    default: Box<dyn Scraper>,
}

impl ScraperRegistry {
    /// Creates a registry with no specialized scrapers and [`DefaultScraper`] as fallback
    pub fn new() -> Self {
        Self::with_default(DefaultScraper)
    }

    /// Creates a registry with a custom fallback scraper
    pub fn with_default(default: impl Scraper + 'static) -> Self {
        Self {
            entries: Vec::new(),
            default: Box::new(default),
        }
    }

    /// Appends a specialized scraper; earlier registrations take precedence
    ///
    /// # Example
    ///
    /// ```
    /// use grawt::{DefaultScraper, DomainMatcher, ScraperRegistry};
    ///
    /// let mut registry = ScraperRegistry::new();
    /// registry.register(DomainMatcher::Wildcard("*.example.com".into()), DefaultScraper);
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn register(
        &mut self,
        matcher: DomainMatcher,
        scraper: impl Scraper + 'static,
    ) -> &mut Self {
        self.entries.push((matcher, Box::new(scraper)));
        self
    }

    /// Selects the scraper responsible for `domain`
    pub fn select(&self, domain: &str) -> &dyn Scraper {
        self.entries
            .iter()
            .find(|(matcher, _)| matcher.matches(domain))
            .map(|(_, scraper)| scraper.as_ref())
            .unwrap_or(self.default.as_ref())
    }

    /// Number of specialized scrapers (the default is not counted)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ScraperRegistry {
    fn default() -> Self {
        Self::new()
    }
}
