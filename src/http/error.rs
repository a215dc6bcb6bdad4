//! Error responses for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::fetch::UpstreamError;

/// Body of every error response: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed `airport` query parameter.
    #[error("airport parameter (3-letter code) is required")]
    InvalidAirport,

    /// The upstream service could not be reached or answered garbage.
    #[error("Failed to reach TSA API: {0}")]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidAirport => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
