//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary with no arguments
//! pulls the built-in feed list into `news_items.json`.

use crate::outputs::json::DEFAULT_OUTPUT_FILE;
use clap::Parser;

/// Command-line arguments for a single extraction run.
///
/// # Examples
///
/// ```sh
/// # Built-in feeds, default output and log files
/// feed_news
///
/// # Custom feed list and output path
/// feed_news -c feeds.yaml -o /srv/news/news_items.json
///
/// # Always exit 0, even when the run fails
/// feed_news --failure-exit-code 0
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to a YAML feed list; the built-in list is used when omitted
    #[arg(short, long, env = "FEED_NEWS_CONFIG")]
    pub config: Option<String>,

    /// File the extracted items are written to (overwritten each run)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Log file, opened in append mode
    #[arg(short, long, default_value = "news_scraper.log")]
    pub log_file: String,

    /// Per-request HTTP timeout in seconds; no timeout when omitted
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Process exit code used when the run fails
    #[arg(long, default_value_t = 1)]
    pub failure_exit_code: u8,
}
