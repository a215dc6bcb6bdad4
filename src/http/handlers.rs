//! HTTP handlers for the REST API.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;
use tracing::{info, warn};

use super::error::AppError;
use super::state::AppState;
use crate::checkpoints::{AirportReport, aggregate};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Normalises the `airport` query value: uppercased, trimmed, and exactly
/// three characters long.
pub fn validate_airport(raw: Option<&str>) -> Result<String, AppError> {
    let airport = raw.unwrap_or_default().to_uppercase().trim().to_string();
    if airport.chars().count() != 3 {
        return Err(AppError::InvalidAirport);
    }
    Ok(airport)
}

/// GET /api/tsa-wait-times?airport=XXX
///
/// Fetches the airport's samples from the upstream source once and returns
/// the per-checkpoint summary.
#[tracing::instrument(skip_all)]
pub async fn tsa_wait_times(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> HandlerResult<AirportReport> {
    let airport = validate_airport(params.get("airport").map(String::as_str))?;

    let samples = state.source.wait_times(&airport).await.map_err(|e| {
        warn!(airport = %airport, error = %e, "Upstream fetch failed");
        AppError::from(e)
    })?;

    let lanes = aggregate(&samples);
    info!(airport = %airport, lanes = lanes.len(), "Wait times summarised");

    Ok(Json(AirportReport::new(airport, lanes, Utc::now())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_airport_normalises() {
        assert_eq!(validate_airport(Some("jfk")).unwrap(), "JFK");
        assert_eq!(validate_airport(Some("  sea ")).unwrap(), "SEA");
    }

    #[test]
    fn test_validate_airport_rejects_bad_lengths() {
        assert!(matches!(validate_airport(None), Err(AppError::InvalidAirport)));
        assert!(matches!(validate_airport(Some("")), Err(AppError::InvalidAirport)));
        assert!(matches!(validate_airport(Some("jf")), Err(AppError::InvalidAirport)));
        assert!(matches!(validate_airport(Some("jfkx")), Err(AppError::InvalidAirport)));
        assert!(matches!(validate_airport(Some("   ")), Err(AppError::InvalidAirport)));
    }
}
