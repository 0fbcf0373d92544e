#[cfg(test)]
#[path = "../../tests/unit/objectives/throughput_time_test.rs"]
mod throughput_time_test;

use super::*;
use crate::utils::compare_floats;
use std::sync::Arc;

/// Minimizes the longest throughput time: time an order spends in the system from its arrival
/// till completion of its batch.
pub struct MaxThroughputTime {
    oracle: Arc<dyn ServiceTimeOracle>,
}

impl MaxThroughputTime {
    /// Creates a new instance of `MaxThroughputTime`.
    pub fn new(oracle: Arc<dyn ServiceTimeOracle>) -> Self {
        Self { oracle }
    }
}

impl ObjectiveFunction for MaxThroughputTime {
    fn name(&self) -> &str {
        "max-throughput-time"
    }

    fn batch_fitness(&self, batch: &Batch, now: Timestamp) -> GenericResult<Cost> {
        let service_time = batch.service_time(self.oracle.as_ref())?;

        Ok(service_time + now - batch.earliest_arrival_time().unwrap_or(now))
    }

    fn fitness(&self, batches: &[Batch], now: Timestamp) -> GenericResult<Cost> {
        let completion_times = get_completion_times(batches, now, self.oracle.as_ref())?;

        Ok(batches
            .iter()
            .zip(completion_times)
            .map(|(batch, completion)| completion - batch.earliest_arrival_time().unwrap_or(now))
            .max_by(|a, b| compare_floats(*a, *b))
            .unwrap_or_default())
    }
}
