//! Detail page extraction
//!
//! Turns one `ItemSummary` into a `BookRecord`. Title, price, availability
//! and the detail link come from the summary block; everything else comes
//! from the item's detail page, which is fetched once per item.
//!
//! Optional detail-page elements fall back to defaults:
//!
//! | Element | Fallback |
//! |---------|----------|
//! | breadcrumb shorter than three links | genre `"Unknown"` |
//! | `#product_description + p` | empty description |
//! | `UPC` / `Product Type` table rows | empty string |
//!
//! Missing summary elements, a missing or unrecognized star rating, and an
//! unreachable detail page are errors.

use crate::crawler::fetcher::{fetch_url, FetchResult};
use crate::crawler::listing::ItemSummary;
use crate::dom::{css, DocumentNode};
use crate::record::{BookRecord, DetailFields, Rating, SummaryFields, UNKNOWN_GENRE};
use crate::{Result, ScraperError};
use reqwest::Client;
use scraper::{ElementRef, Html};
use std::collections::HashMap;

/// Upward path prefix carried by detail links on catalog pages
const RELATIVE_PREFIX: &str = "../../../";

const GENRE_INDEX: usize = 2;

/// Builds the absolute detail-page URL from a summary's relative link
///
/// ```
/// use shelf_crawler::crawler::resolve_detail_url;
///
/// assert_eq!(
///     resolve_detail_url("https://books.toscrape.com/catalogue", "../../../foo/bar.html"),
///     "https://books.toscrape.com/catalogue/foo/bar.html"
/// );
/// ```
pub fn resolve_detail_url(base: &str, relative: &str) -> String {
    let path = relative.strip_prefix(RELATIVE_PREFIX).unwrap_or(relative);
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Reads title, price, availability and detail link from a summary block
pub fn read_summary(item: &ItemSummary) -> Result<SummaryFields> {
    let fragment = Html::parse_fragment(item.html());
    let root = fragment.root_element();

    let link = root
        .find_first(&css("h3 a")?)
        .ok_or_else(|| missing("title link (h3 a)", item.describe()))?;

    let title = link
        .attribute("title")
        .filter(|title| !title.is_empty())
        .ok_or_else(|| missing("title attribute", item.describe()))?;

    let detail_href = link
        .attribute("href")
        .ok_or_else(|| missing("detail link href", item.describe()))?;

    let price = root
        .find_first(&css("p.price_color")?)
        .ok_or_else(|| missing("price (p.price_color)", item.describe()))?
        .text_content();

    let availability = root
        .find_first(&css("p.instock.availability")?)
        .ok_or_else(|| missing("availability (p.instock.availability)", item.describe()))?
        .text_content()
        .trim()
        .to_string();

    Ok(SummaryFields {
        title: title.to_string(),
        price,
        availability,
        detail_href: detail_href.to_string(),
    })
}

/// Extracts genre, rating, description and table attributes from a detail page
///
/// `url` is only used to give errors a location.
pub fn parse_detail(html: &str, url: &str) -> Result<DetailFields> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let genre = root
        .find(&css("ul.breadcrumb li a")?)
        .get(GENRE_INDEX)
        .map(|crumb| crumb.text_content())
        .unwrap_or_else(|| UNKNOWN_GENRE.to_string());

    let rating = read_rating(&root, url)?;

    let description = root
        .find_first(&css("#product_description + p")?)
        .map(|paragraph| paragraph.text_content())
        .unwrap_or_default();

    let mut table = read_attribute_table(&root)?;

    Ok(DetailFields {
        genre,
        rating,
        description,
        upc: table.remove("UPC").unwrap_or_default(),
        product_type: table.remove("Product Type").unwrap_or_default(),
    })
}

/// The rating word is the second class of `p.star-rating`
fn read_rating(root: &ElementRef<'_>, url: &str) -> Result<Rating> {
    let token = root
        .find_first(&css("p.star-rating")?)
        .and_then(|node| node.attribute("class"))
        .and_then(|classes| classes.split_whitespace().nth(1))
        .ok_or_else(|| missing("star rating (p.star-rating)", url.to_string()))?;

    token
        .parse::<Rating>()
        .map_err(|token| ScraperError::InvalidRating {
            token,
            url: url.to_string(),
        })
}

/// Header text to value text for every complete row of the product table
fn read_attribute_table(root: &ElementRef<'_>) -> Result<HashMap<String, String>> {
    let header = css("th")?;
    let value = css("td")?;

    let mut table = HashMap::new();
    for row in root.find(&css("table.table.table-striped tr")?) {
        if let (Some(th), Some(td)) = (row.find_first(&header), row.find_first(&value)) {
            table.insert(th.text_content(), td.text_content());
        }
    }

    Ok(table)
}

/// Fetches the detail page of `item` and assembles its record
///
/// # Errors
///
/// * `ScraperError::MissingElement` - a mandatory summary or detail element is absent
/// * `ScraperError::Http` - the detail page could not be fetched
/// * `ScraperError::Status` - the detail page answered with a status other than 200
pub async fn extract_book(client: &Client, base: &str, item: &ItemSummary) -> Result<BookRecord> {
    let summary = read_summary(item)?;
    let product_url = resolve_detail_url(base, &summary.detail_href);

    tracing::debug!("Fetching detail page for '{}': {}", summary.title, product_url);

    let body = match fetch_url(client, &product_url).await? {
        FetchResult::Success { body } => body,
        FetchResult::HttpError { status_code } => {
            return Err(ScraperError::Status {
                url: product_url,
                status_code,
            });
        }
    };

    let detail = parse_detail(&body, &product_url)?;

    Ok(BookRecord::new(summary, product_url, detail))
}

fn missing(element: &'static str, context: String) -> ScraperError {
    ScraperError::MissingElement { element, context }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_URL: &str = "https://books.toscrape.com/catalogue/a-light-in-the-attic_1000/index.html";

    const FULL_DETAIL: &str = r#"
        <html><body>
        <ul class="breadcrumb">
            <li><a href="../../index.html">Home</a></li>
            <li><a href="../category/books_1/index.html">Books</a></li>
            <li><a href="../category/books/poetry_23/index.html">Poetry</a></li>
            <li class="active">A Light in the Attic</li>
        </ul>
        <article class="product_page">
            <div class="product_main">
                <h1>A Light in the Attic</h1>
                <p class="price_color">£51.77</p>
                <p class="star-rating Three">
                    <i class="icon-star"></i>
                </p>
            </div>
            <div id="product_description" class="sub-header"><h2>Product Description</h2></div>
            <p>It's hard to imagine a world without A Light in the Attic.</p>
            <div class="sub-header"><h2>Product Information</h2></div>
            <table class="table table-striped">
                <tr><th>UPC</th><td>a897fe39b1053632</td></tr>
                <tr><th>Product Type</th><td>Books</td></tr>
                <tr><th>Price (excl. tax)</th><td>£51.77</td></tr>
            </table>
        </article>
        </body></html>
    "#;

    const SUMMARY: &str = r#"<article class="product_pod">
        <div class="image_container">
            <a href="../../../a-light-in-the-attic_1000/index.html"><img src="x.jpg" alt="A Light in the Attic"></a>
        </div>
        <p class="star-rating Three"><i class="icon-star"></i></p>
        <h3><a href="../../../a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
        <div class="product_price">
            <p class="price_color">£51.77</p>
            <p class="instock availability">
                <i class="icon-ok"></i>

                    In stock

            </p>
        </div>
    </article>"#;

    #[test]
    fn test_resolve_detail_url_strips_prefix() {
        assert_eq!(
            resolve_detail_url("https://books.toscrape.com/catalogue", "../../../foo/bar.html"),
            "https://books.toscrape.com/catalogue/foo/bar.html"
        );
    }

    #[test]
    fn test_resolve_detail_url_without_prefix() {
        assert_eq!(
            resolve_detail_url("https://books.toscrape.com/catalogue/", "foo_12/index.html"),
            "https://books.toscrape.com/catalogue/foo_12/index.html"
        );
    }

    #[test]
    fn test_read_summary() {
        let item = ItemSummary::new(1, 0, SUMMARY);
        let summary = read_summary(&item).unwrap();
        assert_eq!(summary.title, "A Light in the Attic");
        assert_eq!(summary.price, "£51.77");
        assert_eq!(summary.availability, "In stock");
        assert_eq!(
            summary.detail_href,
            "../../../a-light-in-the-attic_1000/index.html"
        );
    }

    #[test]
    fn test_read_summary_missing_price_is_fatal() {
        let html = r#"<article class="product_pod">
            <h3><a href="../../../x/index.html" title="X">X</a></h3>
            <p class="instock availability">In stock</p>
        </article>"#;
        let err = read_summary(&ItemSummary::new(2, 4, html)).unwrap_err();
        match err {
            ScraperError::MissingElement { element, context } => {
                assert!(element.starts_with("price"));
                assert_eq!(context, "listing page 2 item 5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_summary_missing_link_is_fatal() {
        let html = r#"<article class="product_pod">
            <p class="price_color">£1.00</p>
            <p class="instock availability">In stock</p>
        </article>"#;
        assert!(matches!(
            read_summary(&ItemSummary::new(1, 0, html)),
            Err(ScraperError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_parse_full_detail() {
        let detail = parse_detail(FULL_DETAIL, DETAIL_URL).unwrap();
        assert_eq!(detail.genre, "Poetry");
        assert_eq!(detail.rating, Rating::Three);
        assert_eq!(
            detail.description,
            "It's hard to imagine a world without A Light in the Attic."
        );
        assert_eq!(detail.upc, "a897fe39b1053632");
        assert_eq!(detail.product_type, "Books");
    }

    #[test]
    fn test_shallow_breadcrumb_falls_back_to_unknown() {
        let html = r#"<html><body>
            <ul class="breadcrumb">
                <li><a href="../../index.html">Home</a></li>
                <li><a href="../category/books_1/index.html">Books</a></li>
                <li class="active">Orphan</li>
            </ul>
            <p class="star-rating One"></p>
        </body></html>"#;
        let detail = parse_detail(html, DETAIL_URL).unwrap();
        assert_eq!(detail.genre, UNKNOWN_GENRE);
    }

    #[test]
    fn test_missing_breadcrumb_falls_back_to_unknown() {
        let html = r#"<html><body><p class="star-rating Five"></p></body></html>"#;
        let detail = parse_detail(html, DETAIL_URL).unwrap();
        assert_eq!(detail.genre, "Unknown");
        assert_eq!(detail.rating, Rating::Five);
    }

    #[test]
    fn test_missing_description_is_empty() {
        let html = r#"<html><body>
            <p class="star-rating Two"></p>
            <p>Not a description: no marker precedes it.</p>
        </body></html>"#;
        let detail = parse_detail(html, DETAIL_URL).unwrap();
        assert_eq!(detail.description, "");
    }

    #[test]
    fn test_missing_table_rows_default_to_empty() {
        let html = r#"<html><body>
            <p class="star-rating Four"></p>
            <table class="table table-striped">
                <tr><th>Availability</th><td>In stock</td></tr>
                <tr><td>orphan value</td></tr>
            </table>
        </body></html>"#;
        let detail = parse_detail(html, DETAIL_URL).unwrap();
        assert_eq!(detail.upc, "");
        assert_eq!(detail.product_type, "");
    }

    #[test]
    fn test_missing_rating_is_fatal() {
        let html = r#"<html><body><ul class="breadcrumb"></ul></body></html>"#;
        assert!(matches!(
            parse_detail(html, DETAIL_URL),
            Err(ScraperError::MissingElement { .. })
        ));
    }

    #[test]
    fn test_unknown_rating_word_is_fatal() {
        let html = r#"<html><body><p class="star-rating Six"></p></body></html>"#;
        match parse_detail(html, DETAIL_URL) {
            Err(ScraperError::InvalidRating { token, url }) => {
                assert_eq!(token, "Six");
                assert_eq!(url, DETAIL_URL);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
