//! Feasibility checks, union and validation of batches.

#[cfg(test)]
#[path = "../../tests/unit/construction/algebra_test.rs"]
mod algebra_test;

use crate::models::{Batch, Order, Weight, fits_capacity};
use crate::utils::{BatchingError, BatchingResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Arc;

/// Checks whether order can be added to the batch without exceeding its capacity.
pub fn can_add_order_to_batch(order: &Order, batch: &Batch) -> bool {
    batch.can_fit(order.weight)
}

/// Checks whether two orders can be put together into one batch.
pub fn can_add_orders_in_a_batch(order1: &Order, order2: &Order, max_weight: Weight) -> bool {
    fits_capacity(order1.weight + order2.weight, max_weight)
}

/// Checks whether two batches can be merged into one.
pub fn can_merge_batches(batch1: &Batch, batch2: &Batch) -> bool {
    batch1.can_fit(batch2.weight())
}

/// Creates a new batch with orders of the first batch followed by orders of the second one.
/// Source batches are never modified. Service time of the union is unknown.
pub fn union_batch(batch1: &Batch, batch2: &Batch) -> BatchingResult<Batch> {
    let mut union = batch1.clone();
    union.extend(batch2)?;

    Ok(union)
}

/// Checks that every order is assigned to exactly one batch and no batch exceeds its capacity.
pub fn validate_solution(orders: &[Arc<Order>], batches: &[Batch]) -> BatchingResult<()> {
    let assigned = batches.iter().map(|batch| batch.size()).sum::<usize>();
    if assigned != orders.len() {
        return Err(BatchingError::SolutionInvalid(format!(
            "expected {} orders to be assigned, got {assigned}",
            orders.len()
        )));
    }

    let known = orders.iter().map(|order| order.id.as_str()).collect::<FxHashSet<_>>();
    let mut seen = FxHashMap::<&str, usize>::default();

    for (batch_idx, batch) in batches.iter().enumerate() {
        if !fits_capacity(batch.weight(), batch.max_weight()) {
            return Err(BatchingError::SolutionInvalid(format!(
                "batch {batch_idx} has weight {} which exceeds capacity {}",
                batch.weight(),
                batch.max_weight()
            )));
        }

        for order in batch.orders() {
            let id = order.id.as_str();

            if !known.contains(id) {
                return Err(BatchingError::SolutionInvalid(format!("unknown order '{id}' in batch {batch_idx}")));
            }

            if let Some(other_idx) = seen.insert(id, batch_idx) {
                return Err(BatchingError::SolutionInvalid(format!(
                    "order '{id}' is assigned more than once: batches {other_idx} and {batch_idx}"
                )));
            }
        }
    }

    Ok(())
}
