#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/basic_test.rs"]
mod basic_test;

use super::*;
use crate::construction::algebra::can_add_order_to_batch;

/// A greedy heuristic which assigns orders one by one in their input order.
///
/// In compact mode, an order goes to the first open batch with enough capacity left (first-fit).
/// Otherwise, only the most recently opened batch is considered, so a batch never receives
/// new orders once another one is opened.
pub struct BasicConstructive {
    capacity: Weight,
    compact: bool,
}

impl BasicConstructive {
    /// Creates a new instance of `BasicConstructive`.
    pub fn new(capacity: Weight, compact: bool) -> Self {
        Self { capacity, compact }
    }
}

impl BatchingAlgorithm for BasicConstructive {
    fn name(&self) -> &str {
        if self.compact { "basic-compact" } else { "basic" }
    }

    fn run(&self, orders: &[Arc<Order>]) -> BatchingResult<Vec<Batch>> {
        orders.iter().try_fold(Vec::<Batch>::new(), |mut batches, order| {
            let candidate = if self.compact {
                batches.iter_mut().find(|batch| can_add_order_to_batch(order, batch))
            } else {
                batches.last_mut().filter(|batch| can_add_order_to_batch(order, batch))
            };

            match candidate {
                Some(batch) => batch.add_order(order.clone())?,
                None => batches.push(create_singleton_batch(order.clone(), self.capacity)?),
            }

            Ok(batches)
        })
    }
}
