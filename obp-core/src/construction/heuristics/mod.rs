//! Contains constructive heuristics which turn a list of orders into a list of capacity feasible batches.

use crate::models::{Batch, Order, Weight};
use crate::utils::{BatchingError, BatchingResult};
use std::sync::Arc;

mod basic;
pub use self::basic::BasicConstructive;

mod savings;
pub use self::savings::SavingsConstructive;

/// A constructive heuristic which groups orders into batches.
pub trait BatchingAlgorithm: Send + Sync {
    /// Returns a name of the heuristic.
    fn name(&self) -> &str;

    /// Builds batches from orders. Every order is assigned to exactly one batch.
    /// Fails if there is an order heavier than the capacity.
    fn run(&self, orders: &[Arc<Order>]) -> BatchingResult<Vec<Batch>>;
}

/// Creates a batch which contains only the given order.
pub(crate) fn create_singleton_batch(order: Arc<Order>, capacity: Weight) -> BatchingResult<Batch> {
    let mut batch = Batch::new(capacity);

    batch.add_order(order.clone()).map_err(|_| BatchingError::UnassignableOrder {
        order_id: order.id.clone(),
        weight: order.weight,
        max_weight: capacity,
    })?;

    Ok(batch)
}
