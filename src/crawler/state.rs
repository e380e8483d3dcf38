/// Visit state definitions for tracking one URL through a crawl
///
/// Every URL popped from the worklist moves through
/// `Pending -> Fetching -> Scraping -> Branching -> Done`, or stops early in
/// `Duplicate` (already in the seen-URL store) or `Aborted` (fetch or scrape failed).
use std::fmt;

/// Represents the current state of a single URL visit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitState {
    // ===== Active States =====
    /// Popped from the worklist, nothing done yet
    Pending,

    /// Waiting on the fetcher (including retries)
    Fetching,

    /// Running the selected scraper over the fetched document
    Scraping,

    /// Article recorded; selecting links to follow
    Branching,

    // ===== Terminal States =====
    /// Article recorded and its links queued
    Done,

    /// URL was already in the seen-URL store
    Duplicate,

    /// Fetch exhausted its retries or scraping failed
    Aborted,
}

impl VisitState {
    /// Returns true if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Duplicate | Self::Aborted)
    }

    /// Returns true if moving from `self` to `next` is a legal step
    pub fn can_transition_to(&self, next: VisitState) -> bool {
        use VisitState::*;

        matches!(
            (self, next),
            (Pending, Fetching)
                | (Fetching, Scraping)
                | (Fetching, Aborted)
                | (Scraping, Branching)
                | (Scraping, Duplicate)
                | (Scraping, Aborted)
                | (Branching, Done)
        )
    }

    /// Lowercase name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::Scraping => "scraping",
            Self::Branching => "branching",
            Self::Done => "done",
            Self::Duplicate => "duplicate",
            Self::Aborted => "aborted",
        }
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
