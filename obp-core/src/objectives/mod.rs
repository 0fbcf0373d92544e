//! Specifies objective functions which score a single batch or an ordered list of batches.
//!
//! Lower values are better for every objective. List level evaluations which model a queue of
//! pickers treat list order as processing order: completion time of a batch includes service
//! times of all batches scheduled ahead of it.

use crate::models::{Batch, Cost, ServiceTimeOracle, Timestamp};
use crate::utils::GenericResult;

mod picking_time;
pub use self::picking_time::{PickingTime, PickingTimeByWeight};

mod complete_batches;
pub use self::complete_batches::NumCompleteBatches;

mod throughput_time;
pub use self::throughput_time::MaxThroughputTime;

mod due_dates;
pub use self::due_dates::{SumEarliness, SumEarlinessTardiness, SumTardiness};

mod batch_times_balance;
pub use self::batch_times_balance::SumAbsoluteDiffBatchTimes;

/// Scores batches. `now` is the evaluation time, callers capture it once per evaluation run.
pub trait ObjectiveFunction: Send + Sync {
    /// Returns a name of the objective.
    fn name(&self) -> &str;

    /// Returns score of a single batch.
    fn batch_fitness(&self, batch: &Batch, now: Timestamp) -> GenericResult<Cost>;

    /// Returns score of the batch list.
    fn fitness(&self, batches: &[Batch], now: Timestamp) -> GenericResult<Cost>;
}

/// Returns completion times of batches processed sequentially in list order, starting at `now`.
pub(crate) fn get_completion_times(
    batches: &[Batch],
    now: Timestamp,
    oracle: &dyn ServiceTimeOracle,
) -> GenericResult<Vec<Timestamp>> {
    batches
        .iter()
        .scan(now, |completion, batch| {
            Some(batch.service_time(oracle).map(|service_time| {
                *completion += service_time;
                *completion
            }))
        })
        .collect()
}
