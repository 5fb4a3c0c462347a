//! Kernel module - server infrastructure and dependencies.

pub mod http_fetcher;
pub mod test_dependencies;
pub mod traits;

pub use http_fetcher::{HttpPageFetcher, BROWSER_USER_AGENT};
pub use test_dependencies::MockPageFetcher;
pub use traits::*;
