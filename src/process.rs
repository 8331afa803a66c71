//! Post-extraction processing of news items.
//!
//! A [`Processor`] receives the full ordered list produced by extraction and
//! returns the list to be saved. It may filter, reorder or enrich items.
//! The shipped [`Passthrough`] leaves the list untouched.

use crate::models::NewsItem;
use std::error::Error;
use tracing::{info, instrument};

/// Trait for transforming the extracted item list before it is saved.
pub trait Processor {
    /// Transform `items`.
    ///
    /// # Errors
    ///
    /// An error aborts the run; nothing is written.
    fn process(&self, items: Vec<NewsItem>) -> Result<Vec<NewsItem>, Box<dyn Error>>;
}

/// Returns items unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Passthrough;

impl Processor for Passthrough {
    #[instrument(level = "info", skip_all, fields(count = items.len()))]
    fn process(&self, items: Vec<NewsItem>) -> Result<Vec<NewsItem>, Box<dyn Error>> {
        info!("Passing items through unchanged");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_preserves_items_and_order() {
        let items = vec![
            NewsItem {
                title: "first".to_string(),
                ..Default::default()
            },
            NewsItem {
                title: "second".to_string(),
                ..Default::default()
            },
        ];

        let processed = Passthrough.process(items.clone()).unwrap();
        assert_eq!(processed, items);
    }

    #[test]
    fn test_passthrough_empty_list() {
        assert!(Passthrough.process(Vec::new()).unwrap().is_empty());
    }
}
