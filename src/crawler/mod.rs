//! Crawler module for catalog traversal and extraction
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with status classification
//! - Listing page traversal
//! - Detail page extraction
//! - Overall crawl coordination
//!
//! Every request is awaited before the next one is issued; nothing runs
//! concurrently.

mod coordinator;
mod detail;
mod fetcher;
mod listing;

pub use coordinator::{scrape_books, Coordinator};
pub use detail::{extract_book, parse_detail, read_summary, resolve_detail_url};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use listing::{fetch_listing, listing_url, parse_listing, ItemSummary};

use crate::config::Config;
use crate::record::BookRecord;
use crate::ScraperError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Walk the configured number of listing pages
/// 3. Extract every listed book from its detail page
///
/// Nothing is written to disk; pass the result to [`crate::output::save_books`].
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Vec<BookRecord>)` - All records, in page and document order
/// * `Err(ScraperError)` - Crawl failed
pub async fn crawl(config: Config) -> Result<Vec<BookRecord>, ScraperError> {
    Coordinator::new(config)?.run().await
}
