//! Document traversal capability
//!
//! Extraction code only needs four operations on a parsed HTML node: find all
//! descendants matching a selector, find the first one, read its text and read
//! an attribute. `DocumentNode` names that capability; `scraper::ElementRef`
//! provides it.

use crate::{Result, ScraperError};
use scraper::{ElementRef, Selector};

/// Compiles a CSS selector, reporting the offending selector on failure
pub fn css(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScraperError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// A node of a parsed HTML document that can be queried by selector
pub trait DocumentNode<'a>: Sized {
    /// All matching descendants, in document order
    fn find(&self, selector: &Selector) -> Vec<Self>;

    /// The first matching descendant, if any
    fn find_first(&self, selector: &Selector) -> Option<Self>;

    /// Text content with runs of whitespace collapsed to single spaces and
    /// the ends trimmed
    fn text_content(&self) -> String;

    /// Raw value of the named attribute
    fn attribute(&self, key: &str) -> Option<&'a str>;
}

impl<'a> DocumentNode<'a> for ElementRef<'a> {
    fn find(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).collect()
    }

    fn find_first(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn text_content(&self) -> String {
        let raw: String = self.text().collect();
        raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn attribute(&self, key: &str) -> Option<&'a str> {
        self.value().attr(key)
    }
}
