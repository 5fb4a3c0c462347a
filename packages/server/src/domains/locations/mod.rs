//! Locations domain - labels scraped from the upstream search form.
//!
//! Pipeline per request: fetch -> parse -> select -> dedupe -> serialize.
//! Nothing is kept between requests.

pub mod errors;
pub mod extract;
pub mod models;
pub mod pipeline;

pub use errors::{ScrapeError, ScrapeErrorKind};
pub use extract::{extract_labels, LABEL_ATTRIBUTE, LABEL_SELECTOR};
pub use models::{dedupe_labels, LocationSet, LocationsResponse};
pub use pipeline::scrape_locations;
