use serde::Deserialize;
use std::path::PathBuf;

/// Root of the catalog; listing and detail URLs are built beneath it
pub const DEFAULT_BASE_URL: &str = "https://books.toscrape.com/catalogue";

/// Number of listing pages visited by a default run
pub const DEFAULT_PAGES: u32 = 5;

/// Directory the JSON file is written into (never created by the crawler)
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Name of the JSON file inside the output directory
pub const DEFAULT_FILENAME: &str = "books_data.json";

/// Main configuration structure for Shelf-Crawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
    pub http: HttpConfig,
}

/// Which catalog to walk and how far
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CatalogConfig {
    /// Catalog root, e.g. `https://books.toscrape.com/catalogue`
    pub base_url: String,

    /// Listing pages to visit, starting at page 1
    pub pages: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pages: DEFAULT_PAGES,
        }
    }
}

impl CatalogConfig {
    /// The base URL with any trailing slash removed
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Existing directory that receives the JSON file
    pub directory: PathBuf,

    /// File name of the JSON array
    pub filename: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
            filename: DEFAULT_FILENAME.to_string(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct HttpConfig {
    /// User-Agent header; when unset the client sends none
    pub user_agent: Option<String>,
}
