//! Book record data model
//!
//! A `BookRecord` is assembled from two halves: the fields read off the
//! listing page (`SummaryFields`) and the fields read off the detail page
//! (`DetailFields`). Serialized key names and their order are part of the
//! output format and must not change.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// strftime pattern of `extraction_datetime`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Genre used when the breadcrumb is too shallow to name one
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Star rating, serialized as its English word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        }
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "One" => Ok(Rating::One),
            "Two" => Ok(Rating::Two),
            "Three" => Ok(Rating::Three),
            "Four" => Ok(Rating::Four),
            "Five" => Ok(Rating::Five),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields read from an item summary block on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFields {
    pub title: String,
    pub price: String,
    /// Already trimmed
    pub availability: String,
    /// Relative link to the detail page, as written in the listing
    pub detail_href: String,
}

/// Fields read from a detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFields {
    pub genre: String,
    pub rating: Rating,
    pub description: String,
    pub upc: String,
    pub product_type: String,
}

/// One extracted book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub price: String,
    pub genre: String,
    pub availability: String,
    #[serde(rename = "avaliation")]
    pub rating: Rating,
    pub description: String,
    pub upc: String,
    pub product_type: String,
    pub product_url: String,
    pub extraction_datetime: String,
}

impl BookRecord {
    /// Assembles a record and stamps it with the current local time
    pub fn new(summary: SummaryFields, product_url: String, detail: DetailFields) -> Self {
        Self {
            title: summary.title,
            price: summary.price,
            genre: detail.genre,
            availability: summary.availability,
            rating: detail.rating,
            description: detail.description,
            upc: detail.upc,
            product_type: detail.product_type,
            product_url,
            extraction_datetime: now_timestamp(),
        }
    }
}

/// Current local wall-clock time formatted with `TIMESTAMP_FORMAT`
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}
