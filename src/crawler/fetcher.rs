//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the single HTTP client shared by a run
//! - GET requests that classify the response status
//!
//! There is no retry and no timeout beyond the client's defaults. Transport
//! failures are returned as errors; a completed response with an unexpected
//! status is returned as `FetchResult::HttpError` so each caller decides
//! whether it is fatal.

use crate::config::HttpConfig;
use crate::ScraperError;
use reqwest::{Client, StatusCode};

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Server answered `200 OK`
    Success {
        /// Page body content
        body: String,
    },

    /// Server answered with any other status
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },
}

/// Builds the HTTP client used for every request of a run
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use shelf_crawler::config::HttpConfig;
/// use shelf_crawler::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder().gzip(true).brotli(true);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }

    builder.build()
}

/// Issues one GET request and reads the body of a `200 OK` response
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchResult)` - The server answered
/// * `Err(ScraperError::Http)` - Connection, TLS, or body read failure
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchResult, ScraperError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScraperError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Ok(FetchResult::HttpError {
            status_code: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| ScraperError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchResult::Success { body })
}
