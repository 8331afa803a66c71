//! Feed extraction pipeline.
//!
//! Turns the configured feed list into an ordered list of [`NewsItem`]s.
//! Feeds are processed one at a time in configuration order, and entries
//! keep their order within each feed. RSS and Atom documents are both
//! accepted (see [`entry`]).
//!
//! # Failure Model
//!
//! | Failure | Effect |
//! |---------|--------|
//! | fetch error, bad HTTP status | run aborts |
//! | document is neither RSS nor Atom | run aborts |
//! | a single field is missing or malformed | that field becomes `""` |
//!
//! Field handling lives in [`fields`], markup stripping in [`html`], and
//! network access behind [`fetch::FetchFeed`].

pub mod entry;
pub mod fetch;
pub mod fields;
pub mod html;

use crate::config::FeedConfig;
use crate::models::NewsItem;
use entry::{FeedDocument, FeedEntry};
use fetch::FetchFeed;
use fields::{extract_category, extract_content, extract_description, extract_pub_date, or_empty};
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// Fetch every configured feed and normalize its entries.
///
/// # Arguments
///
/// * `fetcher` - Source of feed documents
/// * `feeds` - Feeds to pull, in output order
///
/// # Returns
///
/// All items from all feeds, feed-then-entry order, or the first run-level
/// error encountered.
#[instrument(level = "info", skip_all, fields(feeds = feeds.len()))]
pub async fn extract_news_items<F: FetchFeed>(
    fetcher: &F,
    feeds: &[FeedConfig],
) -> Result<Vec<NewsItem>, Box<dyn Error>> {
    let mut news_items = Vec::new();

    for feed in feeds {
        let body = fetcher.fetch(&feed.url).await?;
        let document = FeedDocument::parse(&body)
            .map_err(|e| format!("failed to parse feed {}: {}", feed.url, e))?;

        let before = news_items.len();
        news_items.extend(
            document
                .entries()
                .iter()
                .map(|entry| entry_to_news_item(entry, &feed.source)),
        );
        info!(
            url = %feed.url,
            source = %feed.source,
            kind = document.kind(),
            count = news_items.len() - before,
            "Extracted feed entries"
        );
    }

    info!(count = news_items.len(), "Total items extracted");
    Ok(news_items)
}

/// Normalize one entry. Every derived field degrades independently.
pub fn entry_to_news_item(entry: &FeedEntry<'_>, source: &str) -> NewsItem {
    let title = match entry.title {
        Some(title) => title.to_string(),
        None => {
            warn!(source, "Feed entry has no title");
            String::new()
        }
    };

    let news_item = NewsItem {
        title,
        description: or_empty(extract_description(entry)),
        content: or_empty(extract_content(entry)),
        source: source.to_string(),
        category: extract_category(entry),
        pub_date: or_empty(extract_pub_date(entry)),
    };
    debug!(title = %news_item.title, pub_date = %news_item.pub_date, "Normalized entry");
    news_item
}
