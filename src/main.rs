//! # Feed News
//!
//! Pulls items from a static list of RSS and Atom feeds, strips the markup from their
//! descriptions and content, normalizes publication dates, and saves the
//! result as a single JSON file.
//!
//! ## Usage
//!
//! ```sh
//! feed_news -c feeds.yaml -o news_items.json
//! ```
//!
//! ## Architecture
//!
//! One linear pass per invocation:
//! 1. **Extraction**: Fetch each feed in order and normalize its entries
//! 2. **Processing**: Hand the item list to a [`process::Processor`]
//! 3. **Output**: Overwrite the JSON output file
//!
//! Any failure aborts the run, is logged with its cause chain, and maps to
//! the configured failure exit code. Nothing is written on failure.

use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{Subscriber, debug, error, info, instrument};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod feeds;
mod models;
mod outputs;
mod process;
mod utils;

use cli::Cli;
use config::FeedConfig;
use feeds::extract_news_items;
use feeds::fetch::{FetchFeed, HttpFetcher};
use outputs::json;
use process::{Passthrough, Processor};
use utils::{error_chain, open_append};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(&args.log_file);

    let start_time = std::time::Instant::now();
    info!("feed_news starting up");
    debug!(?args, "Parsed CLI arguments");

    let result = run(&args).await;
    let code = report_outcome(&result, args.failure_exit_code);
    info!(elapsed = ?start_time.elapsed(), code, output = %args.output, "Execution complete");
    ExitCode::from(code)
}

/// Log the outcome of a run and pick the process exit code.
///
/// Success maps to `0`; any failure is logged at error level with its
/// cause chain and maps to `failure_exit_code`.
fn report_outcome(result: &Result<usize, Box<dyn Error>>, failure_exit_code: u8) -> u8 {
    match result {
        Ok(count) => {
            info!(count, "Run succeeded");
            0
        }
        Err(e) => {
            error!(error = %e, chain = %error_chain(&**e), "An error occurred");
            failure_exit_code
        }
    }
}

/// Plain-text subscriber: RFC 3339 UTC timestamp, level, message, fields.
fn log_subscriber(
    writer: BoxMakeWriter,
    filter: EnvFilter,
) -> impl Subscriber + Send + Sync + 'static {
    tfmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .finish()
}

/// Send logs to `log_file` in append mode, or to stderr if it cannot be
/// opened. Only errors are recorded unless `RUST_LOG` says otherwise.
fn init_tracing(log_file: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let (writer, open_error) = match open_append(log_file) {
        Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), None),
        Err(e) => (BoxMakeWriter::new(std::io::stderr), Some(e)),
    };

    log_subscriber(writer, filter).init();

    if let Some(e) = open_error {
        error!(path = %log_file, error = %e, "Could not open log file; logging to stderr");
    }
}

/// Resolve configuration and run the pipeline against the network.
async fn run(args: &Cli) -> Result<usize, Box<dyn Error>> {
    let feeds = config::load_feeds(args.config.as_deref()).await?;
    let fetcher = HttpFetcher::new(args.timeout_secs.map(Duration::from_secs))?;
    run_pipeline(&fetcher, &Passthrough, &feeds, &args.output).await
}

/// Extract, process, save. Returns the number of items written.
#[instrument(level = "info", skip_all, fields(output = %output.as_ref().display()))]
async fn run_pipeline<F: FetchFeed, P: Processor>(
    fetcher: &F,
    processor: &P,
    feeds: &[FeedConfig],
    output: impl AsRef<Path>,
) -> Result<usize, Box<dyn Error>> {
    let news_items = extract_news_items(fetcher, feeds).await?;
    let news_items = processor.process(news_items)?;
    json::save_news_items(&news_items, output).await?;
    Ok(news_items.len())
}
