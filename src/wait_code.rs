//! Translation of TSA wait codes into minute ranges.
//!
//! The upstream service reports waits as a small integer bucket. Code `0`
//! means no wait; any other code `c` covers `(c-1)*10 + 1 ..= c*10` minutes.

use serde_json::Value;

/// Minute range implied by a wait code. Both bounds are `None` when the code
/// carried no usable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaitRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl WaitRange {
    pub const NONE: WaitRange = WaitRange {
        min: None,
        max: None,
    };

    fn new(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Parses a raw `WaitTime` field into an integer code.
///
/// | Input                       | Result            |
/// |-----------------------------|-------------------|
/// | integer                     | itself            |
/// | finite float                | truncated to zero |
/// | `true` / `false`            | `1` / `0`         |
/// | `" 3 "`, `"+3"`, `"-3"`     | parsed integer    |
/// | anything else               | `None`            |
pub fn parse_wait_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                Some(f.trunc() as i64)
            } else {
                None
            }
        }),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Maps an already-parsed wait code to its minute range.
///
/// Codes outside the documented 0..=10 domain are not clamped; the same
/// formula applies. Overflowing codes map to [`WaitRange::NONE`].
pub fn range_for_code(code: Option<i64>) -> WaitRange {
    let Some(c) = code else {
        return WaitRange::NONE;
    };

    if c == 0 {
        return WaitRange::new(0, 0);
    }

    let min = c
        .checked_sub(1)
        .and_then(|v| v.checked_mul(10))
        .and_then(|v| v.checked_add(1));
    let max = c.checked_mul(10);

    match (min, max) {
        (Some(min), Some(max)) => WaitRange::new(min, max),
        _ => WaitRange::NONE,
    }
}

/// Maps a raw upstream wait code to its minute range.
pub fn map_wait_code(value: Option<&Value>) -> WaitRange {
    range_for_code(value.and_then(parse_wait_code))
}
