//! Request-local grouping state.

use std::collections::HashMap;

use crate::checkpoints::{status::Status, types::CheckpointSummary};
use crate::wait_code::WaitRange;

/// Grouping key for samples describing the same physical checkpoint.
pub fn checkpoint_key(airport_code: &str, checkpoint: &str) -> String {
    format!("{airport_code}-CP-{checkpoint}")
}

/// Samples collected for one checkpoint.
#[derive(Debug, Default)]
pub struct CheckpointAccumulator {
    pub name: String,
    pub ranges: Vec<(i64, i64)>,
    pub created: Vec<String>,
}

impl CheckpointAccumulator {
    pub fn new(checkpoint: &str) -> Self {
        Self {
            name: format!("Checkpoint {checkpoint}"),
            ..Default::default()
        }
    }

    /// Records a mapped wait range. Ranges without a lower bound carry no data
    /// and are ignored.
    pub fn push_range(&mut self, range: WaitRange) {
        if let (Some(min), Some(max)) = (range.min, range.max) {
            self.ranges.push((min, max));
        }
    }

    pub fn push_created(&mut self, created: &str) {
        self.created.push(created.to_string());
    }

    /// Reduces the collected samples.
    ///
    /// Minimum and maximum are taken independently, so the result is the
    /// envelope of every observed range. The latest timestamp is the greatest
    /// string, compared lexically.
    pub fn into_summary(self) -> CheckpointSummary {
        let wait_min = self.ranges.iter().map(|&(min, _)| min).min();
        let wait_max = self.ranges.iter().map(|&(_, max)| max).max();
        let last_reported_at_raw = self.created.into_iter().max();

        CheckpointSummary {
            name: self.name,
            wait_min,
            wait_max,
            status: Status::from_wait_max(wait_max),
            precheck: false,
            notes: None,
            last_reported_at_raw,
        }
    }
}

/// Accumulators keyed by checkpoint, iterated in first-insertion order.
#[derive(Debug, Default)]
pub struct CheckpointTable {
    positions: HashMap<String, usize>,
    entries: Vec<CheckpointAccumulator>,
}

impl CheckpointTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the accumulator for `key`, creating it with the display name
    /// derived from `checkpoint` when the key is first seen.
    pub fn entry(&mut self, key: String, checkpoint: &str) -> &mut CheckpointAccumulator {
        let idx = match self.positions.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.entries.push(CheckpointAccumulator::new(checkpoint));
                self.positions.insert(key, idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_summaries(self) -> Vec<CheckpointSummary> {
        self.entries
            .into_iter()
            .map(CheckpointAccumulator::into_summary)
            .collect()
    }
}
