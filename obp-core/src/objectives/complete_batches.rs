#[cfg(test)]
#[path = "../../tests/unit/objectives/complete_batches_test.rs"]
mod complete_batches_test;

use super::*;

/// Counts batches which have no capacity left. Does not depend on service time.
#[derive(Default)]
pub struct NumCompleteBatches {}

impl ObjectiveFunction for NumCompleteBatches {
    fn name(&self) -> &str {
        "num-complete-batches"
    }

    fn batch_fitness(&self, batch: &Batch, _: Timestamp) -> GenericResult<Cost> {
        Ok(if batch.is_full() { 1. } else { 0. })
    }

    fn fitness(&self, batches: &[Batch], now: Timestamp) -> GenericResult<Cost> {
        batches.iter().map(|batch| self.batch_fitness(batch, now)).sum()
    }
}
