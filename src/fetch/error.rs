use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to the upstream wait-time service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("invalid response body: {0}")]
    Body(#[from] serde_json::Error),
}
