//! Listing page fetching
//!
//! A listing page enumerates catalog entries as `article.product_pod` blocks.
//! Each block is captured as an owned `ItemSummary` so that detail extraction
//! can read it after the listing document has been dropped.

use crate::crawler::fetcher::{fetch_url, FetchResult};
use crate::dom::{css, DocumentNode};
use crate::Result;
use reqwest::Client;
use scraper::Html;

const ITEM_SELECTOR: &str = "article.product_pod";

/// One catalog entry as it appears on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    page: u32,
    position: usize,
    html: String,
}

impl ItemSummary {
    pub fn new(page: u32, position: usize, html: impl Into<String>) -> Self {
        Self {
            page,
            position,
            html: html.into(),
        }
    }

    /// Listing page the item was found on (1-based)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Zero-based position of the item within its page
    pub fn position(&self) -> usize {
        self.position
    }

    /// Outer HTML of the summary block
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Human-readable location, used in error messages
    pub fn describe(&self) -> String {
        format!("listing page {} item {}", self.page, self.position + 1)
    }
}

/// URL of listing page `page` under `base`
///
/// ```
/// use shelf_crawler::crawler::listing_url;
///
/// assert_eq!(
///     listing_url("https://books.toscrape.com/catalogue", 3),
///     "https://books.toscrape.com/catalogue/page-3.html"
/// );
/// ```
pub fn listing_url(base: &str, page: u32) -> String {
    format!("{}/page-{}.html", base.trim_end_matches('/'), page)
}

/// Fetches one listing page and returns its item summaries
///
/// A response other than `200 OK` yields an empty list; the page is skipped
/// without error. Transport failures are returned as errors.
pub async fn fetch_listing(client: &Client, base: &str, page: u32) -> Result<Vec<ItemSummary>> {
    let url = listing_url(base, page);
    tracing::debug!("Fetching listing page {}", url);

    match fetch_url(client, &url).await? {
        FetchResult::Success { body } => parse_listing(&body, page),
        FetchResult::HttpError { status_code } => {
            tracing::warn!("Skipping listing page {} ({}): HTTP {}", page, url, status_code);
            Ok(Vec::new())
        }
    }
}

/// Extracts the item summary blocks of a listing page in document order
pub fn parse_listing(html: &str, page: u32) -> Result<Vec<ItemSummary>> {
    let document = Html::parse_document(html);
    let selector = css(ITEM_SELECTOR)?;

    let items: Vec<ItemSummary> = document
        .root_element()
        .find(&selector)
        .into_iter()
        .enumerate()
        .map(|(position, block)| ItemSummary::new(page, position, block.html()))
        .collect();

    Ok(items)
}
