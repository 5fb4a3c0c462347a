use axum::{extract::Extension, Json};

use crate::domains::locations::{scrape_locations, LocationsResponse, ScrapeError};
use crate::server::app::AppState;

/// Scrape the upstream search form and return its distinct location labels
///
/// Returns 200 with `{"details": [...]}`, or a 500 JSON error body built by
/// `ScrapeError`'s `IntoResponse` impl. Each call fetches the upstream page
/// fresh.
pub async fn locations_handler(
    Extension(state): Extension<AppState>,
) -> Result<Json<LocationsResponse>, ScrapeError> {
    let details = scrape_locations(state.fetcher.as_ref(), &state.upstream_url).await?;
    Ok(Json(LocationsResponse { details }))
}
