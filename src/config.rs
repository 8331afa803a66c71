//! Feed list configuration.
//!
//! The feed list is static for the lifetime of a run. It comes either from
//! a YAML file passed on the command line or from the built-in defaults in
//! [`default_feeds`].
//!
//! # File Format
//!
//! ```yaml
//! feeds:
//!   - url: https://feeds.bbci.co.uk/news/rss.xml
//!     source: BBC News
//!   - url: https://feeds.npr.org/1001/rss.xml
//!     source: NPR
//! ```

use serde::Deserialize;
use std::error::Error;
use tokio::fs;
use tracing::{debug, info, instrument};
use url::Url;

/// One feed to pull: where to fetch it and how to label its items.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// The feed document URL.
    pub url: String,
    /// Human-readable label copied into every item's `Source` field.
    pub source: String,
}

impl FeedConfig {
    pub fn new(url: &str, source: &str) -> Self {
        Self {
            url: url.to_string(),
            source: source.to_string(),
        }
    }
}

/// Top-level shape of the YAML configuration file.
#[derive(Debug, Deserialize)]
pub struct FeedList {
    pub feeds: Vec<FeedConfig>,
}

/// The feeds used when no configuration file is given.
pub fn default_feeds() -> Vec<FeedConfig> {
    vec![
        FeedConfig::new("https://feeds.bbci.co.uk/news/rss.xml", "BBC News"),
        FeedConfig::new("https://feeds.npr.org/1001/rss.xml", "NPR"),
        FeedConfig::new("https://www.aljazeera.com/xml/rss/all.xml", "Al Jazeera"),
    ]
}

/// Load and validate the feed list.
///
/// # Arguments
///
/// * `path` - Optional path to a YAML feed list. When `None`, the
///   built-in list from [`default_feeds`] is used.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any entry
/// fails [`validate_feeds`].
#[instrument(level = "info")]
pub async fn load_feeds(path: Option<&str>) -> Result<Vec<FeedConfig>, Box<dyn Error>> {
    let feeds = match path {
        Some(path) => {
            let raw = fs::read_to_string(path).await?;
            let list: FeedList = serde_yaml::from_str(&raw)?;
            info!(path, count = list.feeds.len(), "Loaded feed list");
            list.feeds
        }
        None => {
            let feeds = default_feeds();
            debug!(count = feeds.len(), "Using built-in feed list");
            feeds
        }
    };

    validate_feeds(&feeds)?;
    Ok(feeds)
}

/// Check that the list is non-empty, every URL is an absolute http(s) URL,
/// and every source label is non-blank.
pub fn validate_feeds(feeds: &[FeedConfig]) -> Result<(), Box<dyn Error>> {
    if feeds.is_empty() {
        return Err("feed list is empty".into());
    }

    for feed in feeds {
        let parsed = Url::parse(&feed.url)
            .map_err(|e| format!("invalid feed url {:?}: {}", feed.url, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!("unsupported scheme in feed url {:?}", feed.url).into());
        }
        if feed.source.trim().is_empty() {
            return Err(format!("feed {:?} has an empty source label", feed.url).into());
        }
    }

    Ok(())
}
