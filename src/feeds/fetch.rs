//! Feed retrieval.
//!
//! Fetching sits behind the [`FetchFeed`] trait so the extractor can run
//! against the network in production and against in-memory documents in
//! tests. There is no retry and no caching: one request per feed, and any
//! failure is returned to the caller.

use reqwest::Client;
use std::error::Error;
use std::time::{Duration, Instant};
use tracing::{info, instrument, warn};

/// Trait for retrieving the raw bytes of a feed document.
#[allow(async_fn_in_trait)]
pub trait FetchFeed {
    /// Fetch the document at `url`.
    ///
    /// # Errors
    ///
    /// Implementations return an error for transport failures and for
    /// responses that do not carry a usable document.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>>;
}

/// [`FetchFeed`] over HTTP(S) using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher, optionally with a per-request timeout.
    ///
    /// Without a timeout a stalled server blocks the run indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, Box<dyn Error>> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl FetchFeed for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if let Err(e) = response.error_for_status_ref() {
            warn!(%status, "Feed request returned an error status");
            return Err(e.into());
        }

        let body = response.bytes().await?;
        info!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched feed"
        );
        Ok(body.to_vec())
    }
}
