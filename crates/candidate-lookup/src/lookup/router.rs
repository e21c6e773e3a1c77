use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;
use tracing::error;

use super::directory::CandidateDirectory;
use super::service::{CandidateLookupService, LookupError};
use crate::error::AppError;

pub const INVALID_PHONE_MESSAGE: &str = "Invalid phone number format.";
pub const NOT_FOUND_MESSAGE: &str = "No candidate found with that phone number.";
pub const UPSTREAM_MESSAGE: &str = "Error fetching data from Teamtailor.";
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// Router exposing `GET /candidate/:phone_number`.
pub fn lookup_router<D>(service: Arc<CandidateLookupService<D>>) -> Router
where
    D: CandidateDirectory + 'static,
{
    Router::new()
        .route("/candidate/:phone_number", get(candidate_handler::<D>))
        .with_state(service)
}

pub(crate) async fn candidate_handler<D>(
    State(service): State<Arc<CandidateLookupService<D>>>,
    Path(phone_number): Path<String>,
) -> Result<Response, AppError>
where
    D: CandidateDirectory + 'static,
{
    let result = service.lookup(&phone_number).await?;
    Ok((StatusCode::OK, axum::Json(result.view())).into_response())
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        match self {
            LookupError::InvalidPhone(_) => {
                let payload = json!({ "error": INVALID_PHONE_MESSAGE });
                (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
            }
            LookupError::NotFound { deep_link, .. } => {
                let payload = json!({
                    "error": NOT_FOUND_MESSAGE,
                    "ttquery": deep_link,
                });
                (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
            }
            LookupError::Upstream { status } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let payload = json!({ "error": UPSTREAM_MESSAGE });
                (status, axum::Json(payload)).into_response()
            }
            LookupError::Internal(detail) => {
                error!(%detail, "candidate lookup failed");
                let payload = json!({ "error": INTERNAL_MESSAGE });
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
            }
        }
    }
}
