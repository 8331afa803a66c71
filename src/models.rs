//! Data models for normalized feed items.
//!
//! [`NewsItem`] is the only record this application produces. Every item is
//! built fresh from a feed entry on each run and written out once; nothing
//! is carried over between runs.
//!
//! The JSON keys are PascalCase (`Title`, `PubDate`, ...) to keep the output
//! file compatible with existing consumers of `news_items.json`.

use serde::{Deserialize, Serialize};

/// A feed entry normalized into a flat, text-only record.
///
/// All fields are plain strings. Optional data degrades to an empty string
/// rather than being omitted, so every serialized object carries the same
/// six keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewsItem {
    /// The entry title, verbatim.
    pub title: String,
    /// The entry description with all markup removed.
    pub description: String,
    /// The first content block with markup, scripts and styles removed.
    pub content: String,
    /// The label configured for the feed this entry came from.
    pub source: String,
    /// The first category of the entry, if any.
    pub category: String,
    /// Publication time as `YYYY-MM-DD HH:MM:SS` in UTC.
    pub pub_date: String,
}
