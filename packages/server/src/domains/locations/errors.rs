//! Typed errors for the scrape pipeline.

use thiserror::Error;

/// Failures the scrape pipeline can surface.
///
/// Every variant is a server-side failure; the HTTP boundary maps all of them
/// to a 500 and only distinguishes rejection from everything else.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Upstream answered with a status outside 200..=299
    #[error("upstream responded with HTTP {status}")]
    UpstreamRejected { status: u16 },

    /// Request could not be completed (DNS, connect, timeout, body read)
    #[error("request to upstream failed: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Upstream body is not valid UTF-8 text
    #[error("upstream body is not valid text: {0}")]
    InvalidBody(#[source] std::string::FromUtf8Error),

    /// Label selector could not be compiled or applied
    #[error("failed to query document: {0}")]
    Selector(String),
}

/// Coarse classification used when building the error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeErrorKind {
    UpstreamRejected,
    Unexpected,
}

impl ScrapeError {
    pub fn kind(&self) -> ScrapeErrorKind {
        match self {
            ScrapeError::UpstreamRejected { .. } => ScrapeErrorKind::UpstreamRejected,
            ScrapeError::Network(_) | ScrapeError::InvalidBody(_) | ScrapeError::Selector(_) => {
                ScrapeErrorKind::Unexpected
            }
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Network(Box::new(err))
    }
}
