// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Label extraction lives in domains::locations and only sees page bodies.
//
// Naming convention: Base* for trait names (e.g., BasePageFetcher)

use async_trait::async_trait;

use crate::domains::locations::ScrapeError;

// =============================================================================
// Page Fetcher Trait (Infrastructure - outbound HTTP)
// =============================================================================

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// Fetch a page and return its body text.
    ///
    /// A non-2xx status is `ScrapeError::UpstreamRejected` and the body is not
    /// read. Transport failures are `ScrapeError::Network`. No retries.
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError>;
}
