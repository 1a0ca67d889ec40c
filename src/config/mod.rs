//! Configuration module for Shelf-Crawler
//!
//! Every setting has a default that reproduces the fixed crawl: five listing
//! pages of `https://books.toscrape.com/catalogue`, written to
//! `data/books_data.json`. A TOML file may override any of them.
//!
//! # Example
//!
//! ```no_run
//! use shelf_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("shelf.toml")).unwrap();
//! println!("Crawler will visit {} listing pages", config.catalog.pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CatalogConfig, Config, HttpConfig, OutputConfig, DEFAULT_BASE_URL, DEFAULT_FILENAME,
    DEFAULT_OUTPUT_DIR, DEFAULT_PAGES,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
