//! JSON parser for TSA wait-time payloads.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

const CHECKPOINT_FIELD: &str = "CheckpointIndex";
const AIRPORT_FIELD: &str = "AirportCode";
const WAIT_FIELD: &str = "WaitTime";
const CREATED_FIELD: &str = "Created_Datetime";

/// Checkpoint identifier used when a record does not carry one.
pub const UNKNOWN_CHECKPOINT: &str = "Unknown";

/// Top-level shape of the upstream response body.
///
/// The service answers either with a bare list of records or with an object
/// wrapping that list in `WaitTimes`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WaitTimesPayload {
    List(Vec<Value>),
    Wrapped {
        #[serde(rename = "WaitTimes", default)]
        wait_times: Vec<Value>,
    },
}

impl WaitTimesPayload {
    pub fn into_records(self) -> Vec<Value> {
        match self {
            WaitTimesPayload::List(records) => records,
            WaitTimesPayload::Wrapped { wait_times } => wait_times,
        }
    }
}

/// One upstream record with every optional field resolved to its default.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSample {
    pub checkpoint: String,
    pub airport_code: String,
    pub wait_code: Option<i64>,
    pub created: Option<String>,
}

impl RawSample {
    /// Builds a sample from one upstream JSON object.
    ///
    /// Missing or `null` identifiers fall back to `"Unknown"` (checkpoint) and
    /// `queried_airport` (airport code). A malformed `WaitTime` becomes `None`,
    /// as does a `Created_Datetime` that is not a non-empty string.
    pub fn from_record(record: &Map<String, Value>, queried_airport: &str) -> Self {
        let checkpoint =
            field_as_string(record, CHECKPOINT_FIELD).unwrap_or_else(|| UNKNOWN_CHECKPOINT.into());
        let airport_code =
            field_as_string(record, AIRPORT_FIELD).unwrap_or_else(|| queried_airport.to_string());
        let wait_code = record
            .get(WAIT_FIELD)
            .and_then(crate::wait_code::parse_wait_code);
        let created = match record.get(CREATED_FIELD) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        Self {
            checkpoint,
            airport_code,
            wait_code,
            created,
        }
    }
}

fn field_as_string(record: &Map<String, Value>, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Decodes an upstream body into samples.
///
/// Records that are not JSON objects are skipped so one bad entry cannot
/// fail the whole response.
///
/// # Errors
///
/// Returns an error if the body is not JSON, or is JSON of neither accepted
/// top-level shape.
pub fn parse_samples(bytes: &[u8], queried_airport: &str) -> serde_json::Result<Vec<RawSample>> {
    let payload: WaitTimesPayload = serde_json::from_slice(bytes)?;
    Ok(samples_from_records(payload.into_records(), queried_airport))
}

/// Resolves a list of raw records into samples, skipping non-object entries.
pub fn samples_from_records(records: Vec<Value>, queried_airport: &str) -> Vec<RawSample> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match record {
            Value::Object(map) => Some(RawSample::from_record(&map, queried_airport)),
            other => {
                warn!(index = idx, record = %other, "Skipping non-object wait-time record");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_parse_bare_list() {
        let body = br#"[{"CheckpointIndex": 1, "WaitTime": "2"}]"#;
        let samples = parse_samples(body, "JFK").unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].checkpoint, "1");
        assert_eq!(samples[0].airport_code, "JFK");
        assert_eq!(samples[0].wait_code, Some(2));
    }

    #[test]
    fn test_parse_wrapped_list() {
        let body = br#"{"WaitTimes": [{"CheckpointIndex": "4", "AirportCode": "LAX"}]}"#;
        let samples = parse_samples(body, "JFK").unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].checkpoint, "4");
        assert_eq!(samples[0].airport_code, "LAX");
        assert_eq!(samples[0].wait_code, None);
    }

    #[test]
    fn test_parse_object_without_list_is_empty() {
        let samples = parse_samples(br#"{"Other": 1}"#, "JFK").unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_parse_invalid_shapes() {
        assert!(parse_samples(b"not json", "JFK").is_err());
        assert!(parse_samples(b"\"text\"", "JFK").is_err());
        assert!(parse_samples(b"42", "JFK").is_err());
        assert!(parse_samples(br#"{"WaitTimes": "nope"}"#, "JFK").is_err());
    }

    #[test]
    fn test_non_object_records_are_skipped() {
        let body = br#"[1, "x", null, {"CheckpointIndex": 2}]"#;
        let samples = parse_samples(body, "JFK").unwrap();

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].checkpoint, "2");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let sample = RawSample::from_record(&object(json!({})), "SEA");

        assert_eq!(sample.checkpoint, UNKNOWN_CHECKPOINT);
        assert_eq!(sample.airport_code, "SEA");
        assert_eq!(sample.wait_code, None);
        assert_eq!(sample.created, None);
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let record = object(json!({
            "CheckpointIndex": null,
            "AirportCode": null,
            "WaitTime": null,
            "Created_Datetime": null,
        }));
        let sample = RawSample::from_record(&record, "SEA");

        assert_eq!(sample.checkpoint, UNKNOWN_CHECKPOINT);
        assert_eq!(sample.airport_code, "SEA");
        assert_eq!(sample.wait_code, None);
        assert_eq!(sample.created, None);
    }

    #[test]
    fn test_empty_or_non_string_created_is_ignored() {
        let empty = RawSample::from_record(&object(json!({"Created_Datetime": ""})), "SEA");
        assert_eq!(empty.created, None);

        let number = RawSample::from_record(&object(json!({"Created_Datetime": 17})), "SEA");
        assert_eq!(number.created, None);

        let text = RawSample::from_record(
            &object(json!({"Created_Datetime": "2024-01-01T10:00:00"})),
            "SEA",
        );
        assert_eq!(text.created.as_deref(), Some("2024-01-01T10:00:00"));
    }
}
