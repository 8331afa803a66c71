//! Per-field extraction from feed entries.
//!
//! Each derived field of a [`NewsItem`](crate::models::NewsItem) is pulled
//! out by its own function so a problem with one field never affects the
//! others. Extractors return `Result<String, FieldError>`; the caller folds
//! a [`FieldError`] into an empty string with [`or_empty`].
//!
//! [`FieldError`] is closed: only a missing element, a missing
//! attribute or an unparseable value are tolerated at this level.

use super::entry::{EntryDate, FeedEntry};
use super::html::{html_to_text, html_to_text_without_scripts};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::error::Error;
use std::fmt;
use tracing::debug;

/// Output format for `PubDate`.
pub const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Zone-less layouts some feeds use; read as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The recoverable ways a single field can fail to extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The entry has no element for this field.
    MissingKey(&'static str),
    /// The element exists but the value the field needs is absent.
    MissingAttribute(&'static str),
    /// The value is present but could not be interpreted.
    InvalidValue { field: &'static str, value: String },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MissingKey(field) => write!(f, "missing key `{}`", field),
            FieldError::MissingAttribute(field) => write!(f, "missing attribute `{}`", field),
            FieldError::InvalidValue { field, value } => {
                write!(f, "invalid value for `{}`: {:?}", field, value)
            }
        }
    }
}

impl Error for FieldError {}

/// Degrade a field extraction to an empty string.
pub fn or_empty(result: Result<String, FieldError>) -> String {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Field degraded to empty string");
            String::new()
        }
    }
}

/// Publication time of an entry, normalized to UTC.
///
/// Atom dates arrive parsed. Raw RSS dates go through [`parse_feed_date`].
pub fn extract_pub_date(entry: &FeedEntry<'_>) -> Result<String, FieldError> {
    let published = entry
        .published
        .as_ref()
        .ok_or(FieldError::MissingKey("pubDate"))?;

    let utc = match published {
        EntryDate::Parsed(dt) => dt.with_timezone(&Utc),
        EntryDate::Raw(raw) => parse_feed_date(raw).ok_or_else(|| FieldError::InvalidValue {
            field: "pubDate",
            value: raw.to_string(),
        })?,
    };

    Ok(utc.format(PUB_DATE_FORMAT).to_string())
}

/// Parse the date layouts seen in the wild.
///
/// Order: strict RFC 2822, RFC 3339, RFC 2822 with a long weekday name or a
/// `UTC` zone, then zone-less `YYYY-MM-DD HH:MM:SS` variants and bare dates
/// taken as UTC.
pub fn parse_feed_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(&relax_rfc2822(raw)) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// Drop the weekday (any length) and spell `UTC` as `+0000`.
fn relax_rfc2822(raw: &str) -> String {
    let without_weekday = match raw.split_once(',') {
        Some((day, rest)) if day.chars().all(|c| c.is_ascii_alphabetic()) => rest.trim(),
        _ => raw,
    };
    match without_weekday.strip_suffix("UTC") {
        Some(head) => format!("{}+0000", head),
        None => without_weekday.to_string(),
    }
}

/// Entry description with every tag stripped.
pub fn extract_description(entry: &FeedEntry<'_>) -> Result<String, FieldError> {
    let description = entry
        .description
        .ok_or(FieldError::MissingAttribute("description"))?;
    Ok(html_to_text(description))
}

/// First content block with tags, scripts and styles stripped. An entry
/// without content yields an empty string.
pub fn extract_content(entry: &FeedEntry<'_>) -> Result<String, FieldError> {
    Ok(entry
        .content
        .map(html_to_text_without_scripts)
        .unwrap_or_default())
}

/// Name of the first category, or an empty string.
pub fn extract_category(entry: &FeedEntry<'_>) -> String {
    entry.category.map(str::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rss::extension::dublincore::DublinCoreExtension;
    use rss::{Category, Item};

    fn item_with_pub_date(date: &str) -> Item {
        let mut item = Item::default();
        item.set_pub_date(date.to_string());
        item
    }

    fn pub_date_of(item: &Item) -> Result<String, FieldError> {
        extract_pub_date(&FeedEntry::from(item))
    }

    #[test]
    fn test_pub_date_rfc2822() {
        let item = item_with_pub_date("Mon, 15 Jan 2024 10:30:00 GMT");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_is_normalized_to_utc() {
        let item = item_with_pub_date("Mon, 15 Jan 2024 10:30:00 +0200");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 08:30:00");
    }

    #[test]
    fn test_pub_date_rfc3339_fallback() {
        let item = item_with_pub_date("2024-01-15T10:30:00Z");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_utc_zone_suffix() {
        let item = item_with_pub_date("Mon, 15 Jan 2024 10:30:00 UTC");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_long_weekday_name() {
        let item = item_with_pub_date("Monday, 15 Jan 2024 10:30:00 GMT");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_without_zone_or_t_separator() {
        let item = item_with_pub_date("2024-01-15 10:30:00");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_bare_date() {
        let item = item_with_pub_date("2024-01-15");
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 00:00:00");
    }

    #[test]
    fn test_pub_date_from_dublin_core() {
        let mut dc = DublinCoreExtension::default();
        dc.set_dates(vec!["2024-01-15T10:30:00+00:00".to_string()]);
        let mut item = Item::default();
        item.set_dublin_core_ext(dc);
        assert_eq!(pub_date_of(&item).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_already_parsed() {
        let dt = DateTime::parse_from_rfc3339("2024-01-15T12:30:00+02:00").unwrap();
        let entry = FeedEntry {
            published: Some(EntryDate::Parsed(dt)),
            ..Default::default()
        };
        assert_eq!(extract_pub_date(&entry).unwrap(), "2024-01-15 10:30:00");
    }

    #[test]
    fn test_pub_date_missing() {
        let item = Item::default();
        assert_eq!(pub_date_of(&item), Err(FieldError::MissingKey("pubDate")));
        assert_eq!(or_empty(pub_date_of(&item)), "");
    }

    #[test]
    fn test_pub_date_invalid() {
        let item = item_with_pub_date("yesterday-ish");
        assert!(matches!(
            pub_date_of(&item),
            Err(FieldError::InvalidValue { field: "pubDate", .. })
        ));
        assert_eq!(or_empty(pub_date_of(&item)), "");
    }

    #[test]
    fn test_description_stripped() {
        let mut item = Item::default();
        item.set_description("<p>Hello <b>World</b></p>".to_string());
        assert_eq!(extract_description(&FeedEntry::from(&item)).unwrap(), "Hello World");
    }

    #[test]
    fn test_description_missing() {
        let item = Item::default();
        assert_eq!(
            extract_description(&FeedEntry::from(&item)),
            Err(FieldError::MissingAttribute("description"))
        );
    }

    #[test]
    fn test_description_keeps_script_text_but_content_does_not() {
        let html = "<p>Story</p><script>track()</script><style>.x{}</style>";
        let mut item = Item::default();
        item.set_description(html.to_string());
        item.set_content(html.to_string());
        let entry = FeedEntry::from(&item);

        assert_eq!(extract_description(&entry).unwrap(), "Story track() .x{}");
        assert_eq!(extract_content(&entry).unwrap(), "Story");
    }

    #[test]
    fn test_content_missing_is_empty() {
        let item = Item::default();
        assert_eq!(extract_content(&FeedEntry::from(&item)).unwrap(), "");
    }

    #[test]
    fn test_category_present() {
        let mut item = Item::default();
        let mut tech = Category::default();
        tech.set_name("Tech");
        let mut other = Category::default();
        other.set_name("Other");
        item.set_categories(vec![tech, other]);
        assert_eq!(extract_category(&FeedEntry::from(&item)), "Tech");
    }

    #[test]
    fn test_category_absent() {
        let item = Item::default();
        assert_eq!(extract_category(&FeedEntry::from(&item)), "");
    }

    #[test]
    fn test_field_error_display() {
        let e = FieldError::InvalidValue {
            field: "pubDate",
            value: "nope".to_string(),
        };
        assert_eq!(e.to_string(), "invalid value for `pubDate`: \"nope\"");
        assert_eq!(FieldError::MissingKey("pubDate").to_string(), "missing key `pubDate`");
    }
}
