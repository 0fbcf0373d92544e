#[cfg(test)]
#[path = "../../tests/unit/objectives/batch_times_balance_test.rs"]
mod batch_times_balance_test;

use super::*;
use crate::utils::Float;
use std::sync::Arc;

/// Balances service times across batches: sum of absolute deviations from the mean service time.
pub struct SumAbsoluteDiffBatchTimes {
    oracle: Arc<dyn ServiceTimeOracle>,
}

impl SumAbsoluteDiffBatchTimes {
    /// Creates a new instance of `SumAbsoluteDiffBatchTimes`.
    pub fn new(oracle: Arc<dyn ServiceTimeOracle>) -> Self {
        Self { oracle }
    }
}

impl ObjectiveFunction for SumAbsoluteDiffBatchTimes {
    fn name(&self) -> &str {
        "sum-abs-diff-batch-times"
    }

    fn batch_fitness(&self, batch: &Batch, _: Timestamp) -> GenericResult<Cost> {
        batch.service_time(self.oracle.as_ref())
    }

    fn fitness(&self, batches: &[Batch], _: Timestamp) -> GenericResult<Cost> {
        if batches.is_empty() {
            return Ok(0.);
        }

        let service_times =
            batches.iter().map(|batch| batch.service_time(self.oracle.as_ref())).collect::<GenericResult<Vec<_>>>()?;
        let average = service_times.iter().sum::<Float>() / service_times.len() as Float;

        Ok(service_times.iter().map(|service_time| (average - service_time).abs()).sum())
    }
}
