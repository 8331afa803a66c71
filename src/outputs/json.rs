//! JSON persistence for extracted news items.
//!
//! The whole item list is written as one pretty-printed JSON array,
//! replacing whatever the file held before.
//!
//! # Format
//!
//! ```text
//! [
//!     {
//!         "Title": "...",
//!         "Description": "...",
//!         "Content": "...",
//!         "Source": "...",
//!         "Category": "...",
//!         "PubDate": "2024-01-15 10:30:00"
//!     }
//! ]
//! ```
//!
//! Indentation is four spaces and non-ASCII text is written as UTF-8, not
//! `\u` escapes. The write is not atomic: a failure part way through can
//! leave a truncated file.

use crate::models::NewsItem;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "news_items.json";

/// Serialize items as a 4-space indented JSON array.
pub fn to_json_bytes(news_items: &[NewsItem]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    news_items.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `news_items` to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display(), count = news_items.len()))]
pub async fn save_news_items(
    news_items: &[NewsItem],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn Error>> {
    let json = to_json_bytes(news_items)?;
    fs::write(path.as_ref(), &json).await?;
    info!(bytes = json.len(), "Wrote news items");
    Ok(())
}
