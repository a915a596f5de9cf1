use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const RUNNING: &str = "Bangla News API is running";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    /// `memory` or `postgres`.
    pub mode: String,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
        mode: state.mode.as_str().into(),
        message: RUNNING.into(),
    })
}

/// Router fallback: unmatched paths get the standard error envelope.
pub async fn not_found() -> HttpError {
    HttpError::not_found()
}
