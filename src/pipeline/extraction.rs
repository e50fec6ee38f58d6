//! Breeder extraction pool
//!
//! Workers compete on the stream of listing paths, resolve each against
//! the site base URL, fetch the detail page, and emit one record per
//! successfully fetched page. A page with no recognizable labels still
//! produces an (all-empty) record; only a failed fetch drops a page,
//! and that is logged.

use crate::config::CHANNEL_CAPACITY;
use crate::fetcher::fetch_page;
use crate::parser::extract_breeder;
use crate::record::BreederRecord;
use reqwest::Client;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use url::Url;

/// Spawns `workers` extraction tasks over the listing path stream and
/// returns the stream of extracted records.
///
/// Close/shutdown semantics mirror the discovery pool: the record
/// channel closes when the last worker exits, and a worker stops when
/// the sink is gone — a failed send, or a closed sender checked at the
/// top of the loop for iterations that skip their page and send nothing.
pub fn breeder_records(
    client: Client,
    workers: usize,
    base_url: Url,
    listings: mpsc::Receiver<String>,
) -> mpsc::Receiver<BreederRecord> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
    let listings = Arc::new(Mutex::new(listings));

    for _ in 0..workers {
        let tx = tx.clone();
        let listings = Arc::clone(&listings);
        let client = client.clone();
        let base_url = base_url.clone();

        tokio::spawn(async move {
            loop {
                // Skipped pages send nothing; poll for a vanished sink
                // so those iterations cannot loop forever.
                if tx.is_closed() {
                    break;
                }

                let listing_path = { listings.lock().await.recv().await };
                let Some(listing_path) = listing_path else {
                    break;
                };

                let detail_url = match base_url.join(&listing_path) {
                    Ok(url) => url,
                    Err(e) => {
                        tracing::warn!("Could not resolve listing path {listing_path:?}: {e}");
                        continue;
                    }
                };

                let body = match fetch_page(&client, detail_url.as_str()).await {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::warn!("Could not get page {detail_url}: {e}");
                        continue;
                    }
                };

                let record = extract_breeder(&body);

                if tx.send(record).await.is_err() {
                    break;
                }

                tracing::info!("Processed page {detail_url}");
            }
        });
    }

    rx
}
