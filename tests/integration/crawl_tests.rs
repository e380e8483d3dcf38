//! Crawl tests against a mock site

use crate::common::{create_test_config, mount_page, page, read_json_store};
use chrono::{DateTime, Utc};
use grawt::crawler::crawl;
use grawt::scrapers::ScrapeError;
use grawt::storage::open_seen_store;
use grawt::{Article, Crawler, DefaultScraper, DomainMatcher, GrawtError, Scraper};
use scraper::Html;
use std::collections::HashSet;
use std::sync::atomic::Ordering;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn headlines(articles: &HashSet<Article>) -> Vec<String> {
    let mut headlines: Vec<String> = articles.iter().map(|a| a.headline.clone()).collect();
    headlines.sort();
    headlines
}

#[tokio::test]
async fn test_depth_zero_fetches_only_seed() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 1).await;
    mount_page(&server, "/a", page("A", &[]), 0).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let seed = format!("{}/", base);
    let (articles, stats) = crawler.crawl_site_with_stats(&seed, 0).await.unwrap();

    assert_eq!(headlines(&articles), vec!["Home"]);
    let article = articles.iter().next().unwrap();
    assert_eq!(article.url, seed);
    assert_eq!(article.absolute_links, vec![format!("{}/a", base)]);
    assert_eq!(stats.skipped_by_depth, 1);
}

#[tokio::test]
async fn test_crawl_follows_same_domain_links_to_depth() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(
        &server,
        "/",
        page(
            "Home",
            &[
                format!("{}/a", base),
                format!("{}/b", base),
                "https://elsewhere.invalid/x".to_string(),
                "/relative".to_string(),
            ],
        ),
        1,
    )
    .await;
    mount_page(&server, "/a", page("A", &[format!("{}/c", base)]), 1).await;
    mount_page(&server, "/b", page("B", &[]), 1).await;
    mount_page(&server, "/c", page("C", &[]), 0).await;
    mount_page(&server, "/relative", page("Relative", &[]), 0).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let (articles, stats) = crawler
        .crawl_site_with_stats(&format!("{}/", base), 1)
        .await
        .unwrap();

    assert_eq!(headlines(&articles), vec!["A", "B", "Home"]);
    assert_eq!(stats.scraped, 3);
    assert_eq!(stats.skipped_by_depth, 1);
    assert!(!stats.cancelled);
}

#[tokio::test]
async fn test_mixed_case_seed_follows_links_written_the_same_way() {
    let server = MockServer::start().await;
    let port = server.address().port();
    let base = format!("http://LocalHost:{}", port);
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(
        &server,
        "/",
        page(
            "Home",
            &[
                format!("{}/a", base),
                format!("http://localhost:{}/lower", port),
            ],
        ),
        1,
    )
    .await;
    mount_page(&server, "/a", page("A", &[]), 1).await;
    mount_page(&server, "/lower", page("Lower", &[]), 0).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let articles = crawler.crawl_site(&format!("{}/", base), 1).await.unwrap();

    assert_eq!(headlines(&articles), vec!["A", "Home"]);
}

#[tokio::test]
async fn test_one_shot_crawl_entry_point() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 1).await;
    mount_page(&server, "/a", page("A", &[]), 1).await;

    let articles = crawl(create_test_config(&store), &format!("{}/", base), 1)
        .await
        .unwrap();

    assert_eq!(headlines(&articles), vec!["A", "Home"]);
    assert_eq!(
        read_json_store(&store),
        vec![format!("{}/", base), format!("{}/a", base)]
    );
}

#[tokio::test]
async fn test_depth_first_order_recorded_in_store() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(
        &server,
        "/",
        page("Home", &[format!("{}/a", base), format!("{}/b", base)]),
        1,
    )
    .await;
    mount_page(&server, "/a", page("A", &[format!("{}/a1", base)]), 1).await;
    mount_page(&server, "/a1", page("A1", &[]), 1).await;
    mount_page(&server, "/b", page("B", &[]), 1).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    crawler.crawl_site(&format!("{}/", base), 2).await.unwrap();

    assert_eq!(
        read_json_store(&store),
        vec![
            format!("{}/", base),
            format!("{}/a", base),
            format!("{}/a1", base),
            format!("{}/b", base),
        ]
    );
}

#[tokio::test]
async fn test_link_cycle_terminates() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 2).await;
    mount_page(&server, "/a", page("A", &[format!("{}/", base)]), 1).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let (articles, stats) = crawler
        .crawl_site_with_stats(&format!("{}/", base), 5)
        .await
        .unwrap();

    assert_eq!(headlines(&articles), vec!["A", "Home"]);
    assert_eq!(stats.duplicates, 1);
}

#[tokio::test]
async fn test_repeated_link_within_one_crawl_is_a_duplicate() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(
        &server,
        "/",
        page("Home", &[format!("{}/a", base), format!("{}/a", base)]),
        1,
    )
    .await;
    // Fetched twice: the seen check runs after fetching
    mount_page(&server, "/a", page("A", &[]), 2).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let (articles, stats) = crawler
        .crawl_site_with_stats(&format!("{}/", base), 1)
        .await
        .unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(stats.duplicates, 1);
    assert_eq!(read_json_store(&store).len(), 2);
}

#[tokio::test]
async fn test_seen_seed_is_not_scraped_again() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");
    let seed = format!("{}/", base);

    std::fs::write(&store, serde_json::to_string(&vec![&seed]).unwrap()).unwrap();

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 1).await;
    mount_page(&server, "/a", page("A", &[]), 0).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let (articles, stats) = crawler.crawl_site_with_stats(&seed, 3).await.unwrap();

    assert!(articles.is_empty());
    assert_eq!(stats.duplicates, 1);
    assert_eq!(read_json_store(&store), vec![seed]);
}

#[tokio::test]
async fn test_links_of_seen_page_followed_when_enabled() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");
    let seed = format!("{}/", base);

    std::fs::write(&store, serde_json::to_string(&vec![&seed]).unwrap()).unwrap();

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 1).await;
    mount_page(&server, "/a", page("A", &[]), 1).await;

    let mut config = create_test_config(&store);
    config.skip_links_of_seen = false;
    let mut crawler = Crawler::new(config).unwrap();
    let articles = crawler.crawl_site(&seed, 1).await.unwrap();

    assert_eq!(headlines(&articles), vec!["A"]);
    assert_eq!(read_json_store(&store), vec![seed, format!("{}/a", base)]);
}

#[tokio::test]
async fn test_failed_branch_does_not_abort_crawl() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(
        &server,
        "/",
        page("Home", &[format!("{}/broken", base), format!("{}/ok", base)]),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/ok", page("Ok", &[]), 1).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let (articles, stats) = crawler
        .crawl_site_with_stats(&format!("{}/", base), 1)
        .await
        .unwrap();

    assert_eq!(headlines(&articles), vec!["Home", "Ok"]);
    assert_eq!(stats.aborted, 1);
    assert!(!read_json_store(&store).contains(&format!("{}/broken", base)));
}

#[tokio::test]
async fn test_page_without_headline_is_abandoned() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(&server, "/", page("Home", &[format!("{}/bare", base)]), 1).await;
    mount_page(
        &server,
        "/bare",
        format!(
            r#"<html><body><p>No heading on this page.</p><a href="{}/deeper">x</a></body></html>"#,
            base
        ),
        1,
    )
    .await;
    mount_page(&server, "/deeper", page("Deeper", &[]), 0).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let (articles, stats) = crawler
        .crawl_site_with_stats(&format!("{}/", base), 3)
        .await
        .unwrap();

    assert_eq!(headlines(&articles), vec!["Home"]);
    assert_eq!(stats.aborted, 1);
}

#[tokio::test]
async fn test_cancelled_crawl_still_persists_store() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(&server, "/", page("Home", &[]), 0).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    crawler.cancel_handle().store(true, Ordering::SeqCst);
    let (articles, stats) = crawler
        .crawl_site_with_stats(&format!("{}/", base), 2)
        .await
        .unwrap();

    assert!(articles.is_empty());
    assert!(stats.cancelled);
    assert!(read_json_store(&store).is_empty());
}

#[tokio::test]
async fn test_seed_without_network_location_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    let err = crawler.crawl_site("not a url", 1).await.unwrap_err();

    assert!(matches!(err, GrawtError::InvalidSeed { .. }));
}

#[tokio::test]
async fn test_sqlite_store_remembers_across_runs() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("seen.db");
    let seed = format!("{}/", base);

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 2).await;
    mount_page(&server, "/a", page("A", &[]), 1).await;

    let mut first = Crawler::new(create_test_config(&store)).unwrap();
    let articles = first.crawl_site(&seed, 1).await.unwrap();
    assert_eq!(articles.len(), 2);
    drop(first);

    let mut second = Crawler::new(create_test_config(&store)).unwrap();
    assert_eq!(second.seen_store().len(), 2);
    let articles = second.crawl_site(&seed, 1).await.unwrap();
    assert!(articles.is_empty());

    let reopened = open_seen_store(&store).unwrap();
    assert_eq!(reopened.urls(), &[seed, format!("{}/a", base)]);
}

/// Uses the `<title>` as headline and the default extractors otherwise
struct TitleScraper;

impl Scraper for TitleScraper {
    fn name(&self) -> &str {
        "title"
    }

    fn extract_headline(&self, document: &Html) -> Result<String, ScrapeError> {
        let selector = scraper::Selector::parse("title").unwrap();
        document
            .select(&selector)
            .next()
            .map(|title| format!("[title] {}", title.text().collect::<String>()))
            .ok_or(ScrapeError::MissingHeadline)
    }

    fn extract_main_text(&self, document: &Html, min_chars: usize) -> String {
        DefaultScraper.extract_main_text(document, min_chars)
    }

    fn extract_date(&self, document: &Html) -> DateTime<Utc> {
        DefaultScraper.extract_date(document)
    }

    fn extract_all_links(&self, document: &Html) -> Vec<String> {
        DefaultScraper.extract_all_links(document)
    }

    fn extract_absolute_links(&self, document: &Html) -> Vec<String> {
        DefaultScraper.extract_absolute_links(document)
    }
}

#[tokio::test]
async fn test_registered_scraper_used_for_matching_domain() {
    let server = MockServer::start().await;
    let base = server.uri();
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("urls.json");

    mount_page(&server, "/", page("Home", &[format!("{}/a", base)]), 1).await;
    mount_page(&server, "/a", page("A", &[]), 1).await;

    let mut crawler = Crawler::new(create_test_config(&store)).unwrap();
    crawler
        .registry_mut()
        .register(DomainMatcher::Contains("127.0.0.1".to_string()), TitleScraper);

    let articles = crawler.crawl_site(&format!("{}/", base), 1).await.unwrap();

    assert_eq!(headlines(&articles), vec!["[title] A", "[title] Home"]);
}
