//! Format-neutral view over RSS and Atom documents.
//!
//! RSS 0.9x/1.0/2.0 documents are read with `rss`; anything `rss` rejects
//! is retried as Atom with `atom_syndication`. Both are flattened into
//! [`FeedEntry`] so the field extractors see one shape.

use chrono::{DateTime, FixedOffset};
use std::error::Error;

/// A parsed feed document.
#[derive(Debug)]
pub enum FeedDocument {
    Rss(rss::Channel),
    Atom(atom_syndication::Feed),
}

impl FeedDocument {
    /// Parse `body` as RSS, falling back to Atom.
    ///
    /// # Errors
    ///
    /// Returns an error naming both parser failures when neither format
    /// accepts the document.
    pub fn parse(body: &[u8]) -> Result<Self, Box<dyn Error>> {
        match rss::Channel::read_from(body) {
            Ok(channel) => Ok(FeedDocument::Rss(channel)),
            Err(rss_err) => match atom_syndication::Feed::read_from(body) {
                Ok(feed) => Ok(FeedDocument::Atom(feed)),
                Err(atom_err) => Err(format!(
                    "not an RSS feed ({}) and not an Atom feed ({})",
                    rss_err, atom_err
                )
                .into()),
            },
        }
    }

    /// Entries in document order.
    pub fn entries(&self) -> Vec<FeedEntry<'_>> {
        match self {
            FeedDocument::Rss(channel) => channel.items().iter().map(FeedEntry::from).collect(),
            FeedDocument::Atom(feed) => feed.entries().iter().map(FeedEntry::from).collect(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FeedDocument::Rss(_) => "rss",
            FeedDocument::Atom(_) => "atom",
        }
    }
}

/// Publication time as found in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryDate<'a> {
    /// Unparsed text, e.g. an RSS `pubDate`.
    Raw(&'a str),
    /// Already parsed by the feed library (Atom).
    Parsed(DateTime<FixedOffset>),
}

/// The raw fields of one entry that a [`NewsItem`](crate::models::NewsItem)
/// is derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry<'a> {
    pub title: Option<&'a str>,
    /// RSS `description` or Atom `summary`.
    pub description: Option<&'a str>,
    /// RSS `content:encoded` or Atom `content`.
    pub content: Option<&'a str>,
    pub category: Option<&'a str>,
    pub published: Option<EntryDate<'a>>,
}

impl<'a> From<&'a rss::Item> for FeedEntry<'a> {
    fn from(item: &'a rss::Item) -> Self {
        let published = item
            .pub_date()
            .or_else(|| {
                item.dublin_core_ext()
                    .and_then(|dc| dc.dates().first())
                    .map(String::as_str)
            })
            .map(EntryDate::Raw);

        FeedEntry {
            title: item.title(),
            description: item.description(),
            content: item.content(),
            category: item.categories().first().map(|c| c.name()),
            published,
        }
    }
}

impl<'a> From<&'a atom_syndication::Entry> for FeedEntry<'a> {
    fn from(entry: &'a atom_syndication::Entry) -> Self {
        // atom_syndication defaults a missing <updated> to the Unix epoch.
        let updated = Some(*entry.updated()).filter(|d| d.timestamp() != 0);
        let published = entry.published().copied().or(updated).map(EntryDate::Parsed);

        FeedEntry {
            title: Some(entry.title().as_str()),
            description: entry.summary().map(|s| s.as_str()),
            content: entry.content().and_then(|c| c.value()),
            category: entry.categories().first().map(|c| c.term()),
            published,
        }
    }
}
