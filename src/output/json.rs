//! JSON array output

use crate::record::BookRecord;
use crate::{Result, ScraperError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Indentation of the written file
pub const JSON_INDENT: &[u8] = b"    ";

/// Writes `books` to `directory/filename`, replacing any existing file
///
/// The directory must already exist; it is never created.
///
/// # Arguments
///
/// * `books` - Records in the order they should appear in the array
/// * `directory` - Existing destination directory
/// * `filename` - Name of the JSON file
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(ScraperError::Write)` - The file could not be created or written
///
/// # Example
///
/// ```no_run
/// use shelf_crawler::output::save_books;
/// use std::path::Path;
///
/// let path = save_books(&[], Path::new("data"), "books_data.json").unwrap();
/// println!("Wrote {}", path.display());
/// ```
pub fn save_books(books: &[BookRecord], directory: &Path, filename: &str) -> Result<PathBuf> {
    let path = directory.join(filename);
    let write_error = |source| ScraperError::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    write_books(&mut writer, books).map_err(|e| match e {
        ScraperError::Serialize(e) if e.is_io() => write_error(e.into()),
        other => other,
    })?;
    writer.flush().map_err(write_error)?;

    tracing::info!("Saved {} books to {}", books.len(), path.display());

    Ok(path)
}

/// Serializes `books` as an indented JSON array into `writer`
///
/// Non-ASCII text is written as UTF-8, not escaped. No trailing newline is
/// added.
pub fn write_books<W: Write>(writer: W, books: &[BookRecord]) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    books.serialize(&mut serializer)?;
    Ok(())
}
