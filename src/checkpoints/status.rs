use serde::Serialize;

/// Coarse busyness of a checkpoint, derived from its upper wait bound.
///
/// | Upper bound (min) | Status      |
/// |-------------------|-------------|
/// | none              | `UNKNOWN`   |
/// | <= 10             | `NORMAL`    |
/// | <= 30             | `BUSY`      |
/// | > 30              | `VERY BUSY` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    #[serde(rename = "NORMAL")]
    Normal,
    #[serde(rename = "BUSY")]
    Busy,
    #[serde(rename = "VERY BUSY")]
    VeryBusy,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Status {
    pub fn from_wait_max(wait_max: Option<i64>) -> Self {
        match wait_max {
            None => Status::Unknown,
            Some(m) if m <= 10 => Status::Normal,
            Some(m) if m <= 30 => Status::Busy,
            Some(_) => Status::VeryBusy,
        }
    }
}
