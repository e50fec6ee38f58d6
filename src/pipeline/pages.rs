//! Page number generation and search URL construction
//!
//! The page number source is deliberately infinite: the site's last page
//! is unknown and the pipeline is stopped from the consuming end (the
//! sink's record limit), not from here. Backpressure from the bounded
//! channel keeps the generator from running ahead of the fetchers.

use crate::config::{ScrapeConfig, CHANNEL_CAPACITY};
use tokio::sync::mpsc;
use url::Url;

/// Builds the search-results URL for one page.
///
/// Pure function: the endpoint is fixed, only the `page` and `per_page`
/// query parameters vary.
pub fn build_search_url(search_base: &Url, page: u64, page_size: u32) -> Url {
    let mut url = search_base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("page", &page.to_string())
        .append_pair("per_page", &page_size.to_string());
    url
}

/// Spawns the page number generator.
///
/// Yields `start, start+1, start+2, …` forever. The task exits only when
/// the returned receiver is dropped and a send fails.
pub fn page_numbers(start: u64) -> mpsc::Receiver<u64> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(async move {
        for page in start.. {
            if tx.send(page).await.is_err() {
                break;
            }
        }
    });

    rx
}

/// Spawns the search URL stage: maps each generated page number to a
/// fully-qualified search-results URL.
pub fn search_urls(config: &ScrapeConfig) -> mpsc::Receiver<Url> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let search_base = config.search_url.clone();
    let page_size = config.page_size;
    let mut pages = page_numbers(0);

    tokio::spawn(async move {
        while let Some(page) = pages.recv().await {
            let url = build_search_url(&search_base, page, page_size);
            if tx.send(url).await.is_err() {
                break;
            }
        }
    });

    rx
}
