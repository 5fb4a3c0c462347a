use tracing::{debug, info};

use super::errors::ScrapeError;
use super::extract::extract_labels;
use super::models::{dedupe_labels, LocationSet};
use crate::kernel::BasePageFetcher;

/// Run the full scrape for one request: fetch, extract, dedupe.
///
/// All-or-nothing: any failure aborts the run and no partial set is returned.
/// The parsed document is dropped before this returns and never crosses an
/// await point.
pub async fn scrape_locations(
    fetcher: &dyn BasePageFetcher,
    url: &str,
) -> Result<LocationSet, ScrapeError> {
    debug!(url = %url, "Scraping locations");

    let html = fetcher.fetch_page(url).await?;
    let labels = extract_labels(&html)?;
    let matched = labels.len();

    let locations = dedupe_labels(labels);
    info!(
        url = %url,
        matched = matched,
        distinct = locations.len(),
        "Extracted location labels"
    );

    Ok(locations)
}
