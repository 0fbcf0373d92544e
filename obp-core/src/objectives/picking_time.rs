#[cfg(test)]
#[path = "../../tests/unit/objectives/picking_time_test.rs"]
mod picking_time_test;

use super::*;
use crate::models::{Duration, Weight};
use std::sync::Arc;

/// Minimizes total picking time.
pub struct PickingTime {
    oracle: Arc<dyn ServiceTimeOracle>,
}

impl PickingTime {
    /// Creates a new instance of `PickingTime`.
    pub fn new(oracle: Arc<dyn ServiceTimeOracle>) -> Self {
        Self { oracle }
    }
}

impl ObjectiveFunction for PickingTime {
    fn name(&self) -> &str {
        "picking-time"
    }

    fn batch_fitness(&self, batch: &Batch, _: Timestamp) -> GenericResult<Cost> {
        batch.service_time(self.oracle.as_ref())
    }

    fn fitness(&self, batches: &[Batch], now: Timestamp) -> GenericResult<Cost> {
        batches.iter().map(|batch| self.batch_fitness(batch, now)).sum()
    }
}

/// Minimizes picking time per unit of weight.
///
/// On list level, it is a ratio of total picking time to total weight, not a sum of batch ratios.
pub struct PickingTimeByWeight {
    oracle: Arc<dyn ServiceTimeOracle>,
}

impl PickingTimeByWeight {
    /// Creates a new instance of `PickingTimeByWeight`.
    pub fn new(oracle: Arc<dyn ServiceTimeOracle>) -> Self {
        Self { oracle }
    }
}

impl ObjectiveFunction for PickingTimeByWeight {
    fn name(&self) -> &str {
        "picking-time-by-weight"
    }

    fn batch_fitness(&self, batch: &Batch, _: Timestamp) -> GenericResult<Cost> {
        Ok(get_ratio(batch.service_time(self.oracle.as_ref())?, batch.weight()))
    }

    fn fitness(&self, batches: &[Batch], _: Timestamp) -> GenericResult<Cost> {
        let (service_time, weight) = batches.iter().try_fold((0., 0.), |(service_time, weight), batch| {
            batch.service_time(self.oracle.as_ref()).map(|time| (service_time + time, weight + batch.weight()))
        })?;

        Ok(get_ratio(service_time, weight))
    }
}

/// Empty batches have no weight, their ratio is considered to be zero.
fn get_ratio(service_time: Duration, weight: Weight) -> Cost {
    if weight > 0. { service_time / weight } else { 0. }
}
