//! Output module for persisting crawl results
//!
//! Records are written once, after the crawl has finished, as a single JSON
//! array. Nothing is flushed incrementally.

mod json;

pub use json::{save_books, write_books, JSON_INDENT};
