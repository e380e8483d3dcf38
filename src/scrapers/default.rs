//! Generic HTML scraper used when no specialized scraper matches a domain

use crate::scrapers::{parse_datetime, ScrapeError, Scraper};
use crate::url::has_network_location;
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};

const HEADING_SELECTORS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Scraper for generic HTML documents
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultScraper;

impl Scraper for DefaultScraper {
    fn name(&self) -> &str {
        "default"
    }

    /// Returns the first heading, preferring higher levels
    ///
    /// Any `h1` wins over any `h2`, and so on, regardless of document order.
    /// Falls back to the `<title>` text when there are no headings at all.
    fn extract_headline(&self, document: &Html) -> Result<String, ScrapeError> {
        for css in HEADING_SELECTORS {
            if let Ok(selector) = Selector::parse(css) {
                if let Some(heading) = document.select(&selector).next() {
                    return Ok(element_text(heading));
                }
            }
        }

        Selector::parse("title")
            .ok()
            .and_then(|selector| document.select(&selector).next())
            .map(element_text)
            .ok_or(ScrapeError::MissingHeadline)
    }

    fn extract_main_text(&self, document: &Html, min_chars: usize) -> String {
        let mut main_text = String::new();

        if let Ok(selector) = Selector::parse("p") {
            for paragraph in document.select(&selector) {
                let text = element_text(paragraph);
                if text.chars().count() >= min_chars {
                    main_text.push_str(&text);
                    main_text.push('\n');
                }
            }
        }

        main_text
    }

    /// Returns the earliest parseable `<time datetime="...">` value
    ///
    /// Falls back to the current time when nothing parses, so callers cannot
    /// tell "no date found" apart from a very recent date.
    fn extract_date(&self, document: &Html) -> DateTime<Utc> {
        let mut earliest: Option<DateTime<Utc>> = None;

        if let Ok(selector) = Selector::parse("time") {
            for time in document.select(&selector) {
                let Some(raw) = time.value().attr("datetime") else {
                    tracing::debug!("Skipping <time> element without a datetime attribute");
                    continue;
                };

                match parse_datetime(raw) {
                    Some(parsed) => {
                        earliest = Some(earliest.map_or(parsed, |current| current.min(parsed)));
                    }
                    None => tracing::warn!("Skipping unparsable datetime value: {:?}", raw),
                }
            }
        }

        earliest.unwrap_or_else(Utc::now)
    }

    fn extract_all_links(&self, document: &Html) -> Vec<String> {
        let Ok(selector) = Selector::parse("a") else {
            return Vec::new();
        };

        document
            .select(&selector)
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(str::to_string)
            .collect()
    }

    /// Keeps links that carry a network location
    ///
    /// This is an absolute-link filter, not a same-domain filter: links to
    /// any host are kept, relative and fragment links are dropped.
    fn extract_absolute_links(&self, document: &Html) -> Vec<String> {
        self.extract_all_links(document)
            .into_iter()
            .filter(|link| has_network_location(link))
            .collect()
    }
}

/// Concatenated text of an element and its descendants, untrimmed
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
