use tracing::debug;

use crate::checkpoints::accumulator::{CheckpointTable, checkpoint_key};
use crate::checkpoints::types::CheckpointSummary;
use crate::parser::RawSample;
use crate::wait_code::range_for_code;

/// Groups `samples` by checkpoint and reduces each group to a summary.
///
/// Summaries come back in the order their checkpoint first appears in
/// `samples`. Every checkpoint seen yields a summary, including those with
/// no usable wait code.
#[tracing::instrument(skip_all, fields(samples = samples.len()))]
pub fn aggregate(samples: &[RawSample]) -> Vec<CheckpointSummary> {
    let mut table = CheckpointTable::new();

    for sample in samples {
        let key = checkpoint_key(&sample.airport_code, &sample.checkpoint);
        let acc = table.entry(key, &sample.checkpoint);

        acc.push_range(range_for_code(sample.wait_code));
        if let Some(created) = &sample.created {
            acc.push_created(created);
        }
    }

    debug!(checkpoints = table.len(), "Samples grouped");
    table.into_summaries()
}
