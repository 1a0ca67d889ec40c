//! Crawler coordinator - main crawl orchestration logic
//!
//! Walks listing pages `1..=N` in order, extracts every item of a page before
//! moving to the next, and accumulates the records in one ordered list.
//! Pages that answer with a non-200 status contribute nothing; any other
//! failure aborts the crawl.

use crate::config::{load_config, Config};
use crate::crawler::detail::extract_book;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::listing::fetch_listing;
use crate::record::BookRecord;
use crate::ScraperError;
use reqwest::Client;
use std::path::Path;
use std::time::Instant;

/// Main crawler coordinator structure
#[derive(Debug)]
pub struct Coordinator {
    config: Config,
    client: Client,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Builds the HTTP client that every request of the run shares.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(ScraperError)` - Failed to build the HTTP client
    pub fn new(config: Config) -> Result<Self, ScraperError> {
        let client = build_http_client(&config.http)?;
        Ok(Self { config, client })
    }

    /// Creates a coordinator from a TOML configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Configuration loaded and client built
    /// * `Err(ScraperError::Config)` - The file could not be read, parsed, or validated
    pub fn from_config_file(path: &Path) -> Result<Self, ScraperError> {
        let config = load_config(path)?;
        tracing::info!("Configuration loaded from: {}", path.display());
        Self::new(config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the crawl and returns the collected records
    pub async fn run(&self) -> Result<Vec<BookRecord>, ScraperError> {
        scrape_books(
            &self.client,
            self.config.catalog.base(),
            self.config.catalog.pages,
        )
        .await
    }
}

/// Crawls listing pages `1..=pages` under `base` with an existing client
///
/// # Returns
///
/// * `Ok(Vec<BookRecord>)` - Records in page order, then document order
/// * `Err(ScraperError)` - First fatal failure; earlier records are discarded
pub async fn scrape_books(
    client: &Client,
    base: &str,
    pages: u32,
) -> Result<Vec<BookRecord>, ScraperError> {
    tracing::info!("Starting crawl of {} listing pages under {}", pages, base);

    let start_time = Instant::now();
    let mut books = Vec::new();

    for page in 1..=pages {
        let items = fetch_listing(client, base, page).await?;
        tracing::info!("Listing page {}: {} items", page, items.len());

        for item in &items {
            let book = extract_book(client, base, item).await?;
            tracing::debug!("Extracted '{}' ({})", book.title, book.product_url);
            books.push(book);
        }
    }

    tracing::info!(
        "Crawl completed: {} books from {} pages in {:?}",
        books.len(),
        pages,
        start_time.elapsed()
    );

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_from_config_file() {
        let file = create_temp_config("[catalog]\npages = 2\n");
        let coordinator = Coordinator::from_config_file(file.path()).unwrap();
        assert_eq!(coordinator.config().catalog.pages, 2);
    }

    #[test]
    fn test_from_config_file_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let err = Coordinator::from_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ScraperError::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_config_file_validation_error() {
        let file = create_temp_config("[catalog]\npages = 0\n");
        let err = Coordinator::from_config_file(file.path()).unwrap_err();
        assert!(matches!(err, ScraperError::Config(ConfigError::Validation(_))));
    }

    #[test]
    fn test_from_missing_config_file() {
        let err = Coordinator::from_config_file(Path::new("/nonexistent/shelf.toml")).unwrap_err();
        assert!(matches!(err, ScraperError::Config(ConfigError::Io(_))));
    }
}
