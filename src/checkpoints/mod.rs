//! Per-checkpoint grouping and summarisation.
//!
//! Raw samples are grouped by `"{airport}-CP-{index}"`, each group is reduced
//! to a wait-range envelope, a coarse status and the latest raw timestamp,
//! and the summaries are returned in the order checkpoints were first seen.

pub mod accumulator;
pub mod aggregate;
pub mod status;
pub mod types;

pub use aggregate::aggregate;
pub use status::Status;
pub use types::{AirportReport, CheckpointSummary};
