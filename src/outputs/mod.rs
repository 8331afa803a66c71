//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: Writes the item list to `news_items.json`

pub mod json;
