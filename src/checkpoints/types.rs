//! Output types returned to API clients.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::checkpoints::status::Status;

/// Summary of one security checkpoint.
///
/// `precheck` and `notes` are always `false` / `null`; the upstream feed does
/// not expose either.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointSummary {
    pub name: String,
    pub wait_min: Option<i64>,
    pub wait_max: Option<i64>,
    pub status: Status,
    pub precheck: bool,
    pub notes: Option<String>,
    pub last_reported_at_raw: Option<String>,
}

/// Response body for one airport.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportReport {
    pub airport: String,
    pub updated_at: String,
    pub lanes: Vec<CheckpointSummary>,
}

impl AirportReport {
    /// Wraps `lanes` with `airport` and a second-precision UTC timestamp.
    pub fn new(airport: String, lanes: Vec<CheckpointSummary>, now: DateTime<Utc>) -> Self {
        Self {
            airport,
            updated_at: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            lanes,
        }
    }
}
