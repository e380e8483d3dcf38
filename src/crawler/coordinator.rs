//! Crawler coordinator - main crawl orchestration logic
//!
//! This module drives one crawl from a seed URL:
//! - Deriving the source domain from the seed
//! - Walking a depth-first worklist of `(url, depth)` pairs
//! - Fetching, selecting a scraper, and scraping each URL
//! - Consulting and updating the seen-URL store
//! - Persisting the store once the walk finishes

use crate::config::Config;
use crate::crawler::state::VisitState;
use crate::crawler::Fetcher;
use crate::models::Article;
use crate::scrapers::ScraperRegistry;
use crate::storage::{open_seen_store, SeenStore};
use crate::url::{extract_netloc, network_location};
use crate::GrawtError;
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use url::Url;

/// Counters collected over one `crawl_site` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// URLs that were fetched (or attempted)
    pub visited: usize,

    /// New articles added to the result set
    pub scraped: usize,

    /// URLs that were already in the seen-URL store
    pub duplicates: usize,

    /// Branches abandoned after a fetch or scrape failure
    pub aborted: usize,

    /// Links not visited because they were beyond the depth limit
    pub skipped_by_depth: usize,

    /// Whether the walk stopped early on a cancellation request
    pub cancelled: bool,
}

impl CrawlStats {
    fn record(&mut self, state: VisitState) {
        self.visited += 1;
        match state {
            VisitState::Done => self.scraped += 1,
            VisitState::Duplicate => self.duplicates += 1,
            VisitState::Aborted => self.aborted += 1,
            _ => {}
        }
    }
}

/// Result of visiting one URL: where it ended and which links to follow
struct Visit {
    state: VisitState,
    follow: Vec<String>,
}

impl Visit {
    fn terminal(state: VisitState) -> Self {
        Self {
            state,
            follow: Vec::new(),
        }
    }
}

/// Main crawler structure
///
/// Owns the fetcher, the scraper registry, and the seen-URL store. Each
/// `crawl_site` call builds its own result set; nothing but the seen-URL
/// store carries over between calls.
pub struct Crawler {
    config: Config,
    fetcher: Fetcher,
    registry: ScraperRegistry,
    seen: Box<dyn SeenStore>,
    cancelled: Arc<AtomicBool>,
}

impl Crawler {
    /// Creates a crawler with the default scraper registry
    ///
    /// The seen-URL store at `config.urls_file_path` is loaded here, and
    /// created empty if it does not exist yet.
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(GrawtError)` - The store could not be opened or the HTTP client built
    pub fn new(config: Config) -> Result<Self, GrawtError> {
        let seen = open_seen_store(Path::new(&config.urls_file_path))?;
        Self::with_parts(config, ScraperRegistry::new(), seen)
    }

    /// Creates a crawler from an explicit registry and seen-URL store
    pub fn with_parts(
        config: Config,
        registry: ScraperRegistry,
        seen: Box<dyn SeenStore>,
    ) -> Result<Self, GrawtError> {
        let fetcher = Fetcher::from_config(&config)?;
        tracing::debug!(
            "Crawler ready: {} specialized scrapers, {} seen URLs",
            registry.len(),
            seen.len()
        );

        Ok(Self {
            config,
            fetcher,
            registry,
            seen,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Mutable access to the registry, for adding specialized scrapers
    pub fn registry_mut(&mut self) -> &mut ScraperRegistry {
        &mut self.registry
    }

    pub fn seen_store(&self) -> &dyn SeenStore {
        self.seen.as_ref()
    }

    /// Flag that stops the current crawl before its next URL when set
    ///
    /// The seen-URL store is still persisted after a cancelled walk.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Crawls from `seed_url`, following links up to `max_depth` levels deep
    ///
    /// Only links containing the seed's network location as a substring are
    /// followed. The network location is taken verbatim from `seed_url`, so
    /// its case and any explicit port must appear in the link text too.
    /// Failed branches are logged and left out of the result; they never
    /// abort the crawl.
    ///
    /// # Returns
    ///
    /// * `Ok(HashSet<Article>)` - Every newly scraped article
    /// * `Err(GrawtError)` - The seed has no network location, or the
    ///   seen-URL store could not be written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use grawt::config::load_config;
    /// use grawt::Crawler;
    /// use std::path::Path;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = load_config(Path::new("config.toml"))?;
    /// let mut crawler = Crawler::new(config)?;
    /// let articles = crawler.crawl_site("https://example.com/", 2).await?;
    /// for article in &articles {
    ///     println!("{}", article.headline);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl_site(
        &mut self,
        seed_url: &str,
        max_depth: u32,
    ) -> Result<HashSet<Article>, GrawtError> {
        let (articles, _) = self.crawl_site_with_stats(seed_url, max_depth).await?;
        Ok(articles)
    }

    /// Same as [`Crawler::crawl_site`], also returning crawl counters
    pub async fn crawl_site_with_stats(
        &mut self,
        seed_url: &str,
        max_depth: u32,
    ) -> Result<(HashSet<Article>, CrawlStats), GrawtError> {
        // Raw authority text, compared as-is against raw link text
        let source_domain = network_location(seed_url)
            .map(str::to_string)
            .ok_or_else(|| GrawtError::InvalidSeed {
                url: seed_url.to_string(),
            })?;

        tracing::info!(
            "Starting crawl of {} (domain {}, max depth {})",
            seed_url,
            source_domain,
            max_depth
        );
        let start_time = std::time::Instant::now();

        let mut articles = HashSet::new();
        let mut stats = CrawlStats::default();
        let mut worklist = vec![(seed_url.to_string(), 0u32)];

        while let Some((url, depth)) = worklist.pop() {
            if self.cancelled.load(Ordering::SeqCst) {
                tracing::info!("Crawl cancelled with {} URLs left", worklist.len() + 1);
                stats.cancelled = true;
                break;
            }

            if depth > max_depth {
                tracing::trace!("Skipping {} beyond max depth", url);
                stats.skipped_by_depth += 1;
                continue;
            }

            let visit = self.visit(&url, &source_domain, &mut articles).await;
            stats.record(visit.state);

            // Reversed so links are popped, and visited, in document order
            worklist.extend(visit.follow.into_iter().rev().map(|link| (link, depth + 1)));
        }

        self.seen.persist()?;

        tracing::info!(
            "Crawl of {} finished in {:?}: {} scraped, {} duplicates, {} aborted, {} beyond depth",
            seed_url,
            start_time.elapsed(),
            stats.scraped,
            stats.duplicates,
            stats.aborted,
            stats.skipped_by_depth
        );

        Ok((articles, stats))
    }

    /// Visits one URL: fetch, scrape, dedup, and pick links to follow
    async fn visit(
        &mut self,
        url: &str,
        source_domain: &str,
        articles: &mut HashSet<Article>,
    ) -> Visit {
        let mut state = VisitState::Pending;

        let article = match self.fetch_and_scrape(url, &mut state).await {
            Ok(article) => article,
            Err(e) => {
                tracing::warn!("Abandoning {}: {}", url, e);
                transition(url, &mut state, VisitState::Aborted);
                return Visit::terminal(state);
            }
        };

        if self.seen.contains(url) {
            tracing::info!("Found an already scraped article: {}", url);
            transition(url, &mut state, VisitState::Duplicate);

            if self.config.skip_links_of_seen {
                return Visit::terminal(state);
            }
            return Visit {
                state,
                follow: links_in_domain(&article, source_domain),
            };
        }

        transition(url, &mut state, VisitState::Branching);
        self.seen.insert(url);
        let follow = links_in_domain(&article, source_domain);
        articles.insert(article);
        tracing::info!("Scraped {}", url);

        transition(url, &mut state, VisitState::Done);
        Visit { state, follow }
    }

    async fn fetch_and_scrape(
        &self,
        url: &str,
        state: &mut VisitState,
    ) -> Result<Article, GrawtError> {
        transition(url, state, VisitState::Fetching);
        let document = self.fetcher.fetch(url).await?;

        transition(url, state, VisitState::Scraping);
        let domain = Url::parse(url)
            .ok()
            .as_ref()
            .and_then(extract_netloc)
            .unwrap_or_default();
        let scraper = self.registry.select(&domain);
        tracing::debug!("Scraping {} with the {} scraper", url, scraper.name());

        let mut article = scraper.scrape(&document, self.config.main_text_min_length)?;
        article.url = url.to_string();
        Ok(article)
    }
}

/// Absolute links of `article` that contain `source_domain` as a substring
fn links_in_domain(article: &Article, source_domain: &str) -> Vec<String> {
    article
        .absolute_links
        .iter()
        .filter(|link| link.contains(source_domain))
        .cloned()
        .collect()
}

fn transition(url: &str, state: &mut VisitState, next: VisitState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal visit transition {} -> {}",
        state,
        next
    );
    tracing::trace!("{}: {} -> {}", url, state, next);
    *state = next;
}
