//! The scrape pipeline
//!
//! Stages, connected by bounded channels (capacity 16):
//!
//! ```text
//! page numbers -> search URLs -> listing discovery pool
//!              -> breeder extraction pool -> bounded CSV sink
//! ```
//!
//! The page source is infinite; flow control comes from the bounded
//! channels and the run ends when the sink reaches its record limit.
//! Shutdown propagates backwards through channel closure: the sink drops
//! its receiver, each upstream worker notices its output channel is gone
//! (a failed send, or the closed-sender check each pool runs before
//! pulling more input) and exits, until the generator itself stops. No
//! task is left blocked or looping.

mod discovery;
mod extraction;
mod pages;
mod sink;

pub use discovery::listing_paths;
pub use extraction::breeder_records;
pub use pages::{build_search_url, page_numbers, search_urls};
pub use sink::write_records;

use crate::config::ScrapeConfig;
use crate::Result;
use reqwest::Client;
use std::io::Write;

/// Runs the full pipeline against `config.base_url`, writing CSV to
/// `writer`. Returns the number of data rows written.
///
/// Record order is not deterministic: workers race on the shared input
/// streams, so records arrive in whatever order fetches complete.
pub async fn run_scrape<W: Write>(
    config: &ScrapeConfig,
    client: Client,
    writer: W,
) -> Result<usize> {
    let pages = search_urls(config);
    let listings = listing_paths(client.clone(), config.workers, pages);
    let records = breeder_records(client, config.workers, config.base_url.clone(), listings);

    write_records(records, writer, config.limit).await
}
