//! Listing discovery pool
//!
//! A fixed-size pool of workers competes on the stream of search-result
//! URLs, fetches each page, and emits every discovered listing path
//! downstream. A failed fetch affects only its own URL: the worker logs
//! it and moves on.

use crate::config::CHANNEL_CAPACITY;
use crate::fetcher::fetch_page;
use crate::parser::extract_listing_paths;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use url::Url;

/// Spawns `workers` discovery tasks over the search URL stream and
/// returns the stream of listing paths they produce.
///
/// Each worker holds a clone of the output sender; the channel closes
/// once the last worker exits, so downstream consumers see end-of-stream
/// only after every in-flight page has been drained. A worker exits when
/// the input stream closes or when downstream has shut down — observed
/// either as a failed send or, for pages that yield nothing to send, as
/// a closed sender at the top of the loop. Without the latter check a
/// worker on a run of card-less pages would fetch forever.
pub fn listing_paths(
    client: Client,
    workers: usize,
    pages: mpsc::Receiver<Url>,
) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let pages = Arc::new(Mutex::new(pages));

    for _ in 0..workers {
        let tx = tx.clone();
        let pages = Arc::clone(&pages);
        let client = client.clone();

        tokio::spawn(async move {
            loop {
                // A page with no cards sends nothing, so a failed send
                // alone would never stop this worker.
                if tx.is_closed() {
                    break;
                }

                // Lock only for the receive itself, never across a fetch.
                let page_url = { pages.lock().await.recv().await };
                let Some(page_url) = page_url else {
                    break;
                };

                let body = match fetch_page(&client, page_url.as_str()).await {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::warn!("Could not get page {page_url}: {e}");
                        continue;
                    }
                };

                tracing::info!("Downloaded page data from {page_url}");

                let mut downstream_closed = false;
                for path in extract_listing_paths(&body) {
                    if tx.send(path).await.is_err() {
                        downstream_closed = true;
                        break;
                    }
                }
                if downstream_closed {
                    break;
                }
            }
        });
    }

    rx
}
