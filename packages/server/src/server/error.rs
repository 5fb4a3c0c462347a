//! Failure boundary: maps pipeline errors to JSON error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domains::locations::{ScrapeError, ScrapeErrorKind};

pub const UPSTREAM_REJECTED_MESSAGE: &str = "Failed to fetch website";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error while scraping";

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&ScrapeError> for ErrorBody {
    fn from(err: &ScrapeError) -> Self {
        match err.kind() {
            // Upstream status is logged, not echoed back
            ScrapeErrorKind::UpstreamRejected => ErrorBody {
                error: UPSTREAM_REJECTED_MESSAGE,
                message: None,
            },
            ScrapeErrorKind::Unexpected => ErrorBody {
                error: UNEXPECTED_ERROR_MESSAGE,
                message: Some(err.to_string()),
            },
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        match &self {
            ScrapeError::UpstreamRejected { status } => {
                tracing::error!(upstream_status = *status, "Failed to fetch website");
            }
            other => {
                tracing::error!(error = %other, "Unexpected error while scraping");
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::from(&self))).into_response()
    }
}
