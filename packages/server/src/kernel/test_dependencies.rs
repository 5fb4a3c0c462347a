// TestDependencies - mock implementations for testing
//
// Provides a canned-response page fetcher so routes and the pipeline can be
// exercised without network access.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::BasePageFetcher;
use crate::domains::locations::ScrapeError;

// =============================================================================
// Mock Page Fetcher
// =============================================================================

/// Canned outcome for one `fetch_page` call
#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(String),
    Status(u16),
    NetworkError(String),
}

/// Page fetcher that replays queued responses in order.
///
/// Once the queue is drained every call returns an empty document.
#[derive(Clone, Default)]
pub struct MockPageFetcher {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, html: &str) -> Self {
        self.push(MockResponse::Body(html.to_string()))
    }

    pub fn with_status(self, status: u16) -> Self {
        self.push(MockResponse::Status(status))
    }

    pub fn with_network_error(self, message: &str) -> Self {
        self.push(MockResponse::NetworkError(message.to_string()))
    }

    /// URLs requested so far, in call order
    pub fn requested_urls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    fn push(self, response: MockResponse) -> Self {
        lock(&self.responses).push_back(response);
        self
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        lock(&self.calls).push(url.to_string());

        let next = lock(&self.responses).pop_front();
        match next {
            Some(MockResponse::Body(html)) => Ok(html),
            Some(MockResponse::Status(status)) => Err(ScrapeError::UpstreamRejected { status }),
            Some(MockResponse::NetworkError(message)) => Err(ScrapeError::Network(message.into())),
            None => Ok("<html><body></body></html>".to_string()),
        }
    }
}
