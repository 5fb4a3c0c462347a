//! Upstream page fetcher - reqwest with a browser identity
//!
//! The upstream site turns away obvious bots, so requests carry a desktop
//! browser User-Agent and the usual browser Accept headers. One client is
//! built at startup and shared by all requests (reqwest pools connections
//! internally).

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use std::time::Duration;
use tracing::{debug, warn};

use super::BasePageFetcher;
use crate::domains::locations::ScrapeError;

/// Desktop browser identity sent upstream
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Maximum redirects followed before giving up
const MAX_REDIRECTS: usize = 5;

pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("nl-BE,nl;q=0.9,en;q=0.8"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl BasePageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            ScrapeError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Upstream rejected request");
            return Err(ScrapeError::UpstreamRejected {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to read response body");
            ScrapeError::from(e)
        })?;

        // Undecodable bytes are an error, never replacement characters
        let body = String::from_utf8(Vec::from(bytes)).map_err(|e| {
            warn!(url = %url, error = %e, "Response body is not valid UTF-8");
            ScrapeError::InvalidBody(e)
        })?;

        debug!(url = %url, bytes = body.len(), "HTTP fetch complete");
        Ok(body)
    }
}
