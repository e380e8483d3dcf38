//! URL handling module for Grawt
//!
//! This module provides network-location extraction, the absolute-link check
//! used by scrapers, and the domain matchers used to pick a scraper.

mod domain;
mod matcher;

// Re-export main functions
pub use domain::{extract_netloc, has_network_location, network_location};
pub use matcher::{contains_ignore_case, matches_wildcard};

/// Predicate deciding whether a scraper handles a given domain
///
/// `Contains` reproduces loose substring matching; `Exact` and `Wildcard`
/// compare hostnames structurally. All variants are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainMatcher {
    /// Case-insensitive substring of the domain ("example" matches `notexample.org`)
    Contains(String),
    /// Exact hostname, ignoring any port
    Exact(String),
    /// `*.example.com` style pattern, matching the base domain and its subdomains
    Wildcard(String),
}

impl DomainMatcher {
    /// Returns true if `domain` (a host or host:port) satisfies this matcher
    ///
    /// # Examples
    ///
    /// ```
    /// use grawt::url::DomainMatcher;
    ///
    /// assert!(DomainMatcher::Contains("example".into()).matches("www.example.com"));
    /// assert!(DomainMatcher::Wildcard("*.example.com".into()).matches("www.example.com"));
    /// assert!(!DomainMatcher::Exact("example.com".into()).matches("www.example.com"));
    /// ```
    pub fn matches(&self, domain: &str) -> bool {
        match self {
            Self::Contains(needle) => contains_ignore_case(needle, domain),
            Self::Exact(host) => matcher::strip_port(domain).eq_ignore_ascii_case(host),
            Self::Wildcard(pattern) => {
                if pattern.starts_with("*.") {
                    matches_wildcard(pattern, domain)
                } else {
                    matches_wildcard(&format!("*.{}", pattern), domain)
                }
            }
        }
    }
}
