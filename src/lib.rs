//! Breeder-Scout: a marketplace breeder directory scraper
//!
//! This crate crawls the paginated puppy-listing search of a marketplace
//! site, follows each listing to its breeder detail page, extracts a
//! structured record from the label/value info block, and streams the
//! results to a CSV writer with a cap on total records.
//!
//! The work is organized as a staged pipeline of worker pools connected
//! by bounded channels; see the [`pipeline`] module.

pub mod config;
pub mod fetcher;
pub mod parser;
pub mod pipeline;
pub mod record;

use thiserror::Error;

/// Main error type for Breeder-Scout operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Invalid base URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Breeder-Scout operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

// Re-export commonly used types
pub use config::ScrapeConfig;
pub use pipeline::run_scrape;
pub use record::BreederRecord;
