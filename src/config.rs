//! Scrape configuration
//!
//! There is no configuration file; everything is either a compiled-in
//! default matching the target site or a CLI flag. The only fatal
//! validation is parsing the base URL, which happens once at startup.

use crate::{Result, ScrapeError};
use url::Url;

/// Root of the marketplace site. Plain HTTP; the site does not serve TLS.
pub const BASE_URL: &str = "http://marketplace.akc.org";

/// Path of the paginated puppy search under the base URL.
pub const SEARCH_ENDPOINT: &str = "/puppies";

/// Listings requested per search page, fixed for the whole run.
pub const RESULTS_PER_PAGE: u32 = 40;

/// Capacity of every inter-stage channel. Small on purpose: producers
/// block once it fills, which throttles page generation to match
/// downstream fetch throughput.
pub const CHANNEL_CAPACITY: usize = 16;

pub const DEFAULT_WORKERS: usize = 4;
pub const DEFAULT_LIMIT: usize = 1000;

/// Runtime configuration for one scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Site root; listing paths are resolved against this.
    pub base_url: Url,

    /// Search endpoint URL (base + search path); page/per_page query
    /// parameters are filled in per page number.
    pub search_url: Url,

    /// Number of concurrent workers per fetch stage.
    pub workers: usize,

    /// Maximum number of records written before the sink stops.
    pub limit: usize,

    /// Listings per search page.
    pub page_size: u32,
}

impl ScrapeConfig {
    /// Creates a configuration against the production base URL.
    pub fn new(workers: usize, limit: usize) -> Result<Self> {
        Self::with_base_url(BASE_URL, workers, limit)
    }

    /// Creates a configuration against an arbitrary site root.
    ///
    /// A base URL that fails to parse is a static configuration error:
    /// no correct request can ever be built from it, so this returns
    /// `ScrapeError::InvalidBaseUrl` and the caller should abort.
    pub fn with_base_url(base: &str, workers: usize, limit: usize) -> Result<Self> {
        let base_url = Url::parse(base).map_err(|source| ScrapeError::InvalidBaseUrl {
            url: base.to_string(),
            source,
        })?;

        let search = format!("{}{}", base.trim_end_matches('/'), SEARCH_ENDPOINT);
        let search_url = Url::parse(&search).map_err(|source| ScrapeError::InvalidBaseUrl {
            url: search.clone(),
            source,
        })?;

        Ok(Self {
            base_url,
            search_url,
            workers,
            limit,
            page_size: RESULTS_PER_PAGE,
        })
    }
}
