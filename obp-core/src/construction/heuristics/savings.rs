#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/savings_test.rs"]
mod savings_test;

use super::*;
use crate::construction::algebra::{can_add_orders_in_a_batch, can_merge_batches, union_batch};
use crate::models::{Cost, Duration, Timestamp};
use crate::objectives::ObjectiveFunction;
use crate::utils::{Environment, compare_floats};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A Clarke-Wright like agglomerative heuristic: starts with one batch per order and repeatedly
/// merges a pair of batches while a capacity feasible pair exists.
///
/// On each step, the pair whose union has the lowest objective value is merged. Ties are resolved
/// in favor of the pair found first when scanning pairs `(i, j)`, `i < j`, in list order.
/// A merged batch takes the place of the first batch of the pair.
pub struct SavingsConstructive {
    objective: Arc<dyn ObjectiveFunction>,
    capacity: Weight,
    environment: Arc<Environment>,
}

/// A batch alive during merging.
struct Node {
    key: usize,
    batch: Batch,
    cost: Cost,
}

/// An evaluated union of two alive batches. The union itself is rebuilt only for the merged pair.
struct Candidate {
    cost: Cost,
    service_time: Option<Duration>,
}

impl SavingsConstructive {
    /// Creates a new instance of `SavingsConstructive`.
    pub fn new(objective: Arc<dyn ObjectiveFunction>, capacity: Weight, environment: Arc<Environment>) -> Self {
        Self { objective, capacity, environment }
    }

    fn merge_all(&self, orders: &[Arc<Order>]) -> BatchingResult<Vec<Batch>> {
        let now = self.environment.now();

        let mut nodes = orders
            .iter()
            .enumerate()
            .map(|(key, order)| -> BatchingResult<Node> {
                let batch = create_singleton_batch(order.clone(), self.capacity)?;
                let cost = self.objective.batch_fitness(&batch, now)?;

                Ok(Node { key, batch, cost })
            })
            .collect::<BatchingResult<Vec<_>>>()?;

        // unions of pairs which were not affected by merges stay valid between iterations
        let mut candidates = FxHashMap::<(usize, usize), Candidate>::default();
        let mut next_key = nodes.len();
        let mut total_saving = 0.;
        let mut merges = 0_usize;

        while let Some((left_idx, right_idx)) = self.select_pair(&nodes, &mut candidates, now)? {
            let right = nodes.remove(right_idx);
            let left = &nodes[left_idx];
            let (left_key, right_key) = (left.key, right.key);

            let union = union_batch(&left.batch, &right.batch)?;
            let cost = match candidates.remove(&(left_key, right_key)) {
                Some(candidate) => {
                    union.restore_service_time(candidate.service_time);
                    candidate.cost
                }
                None => self.objective.batch_fitness(&union, now)?,
            };

            total_saving += left.cost + right.cost - cost;
            merges += 1;

            candidates.retain(|&(a, b), _| a != left_key && a != right_key && b != left_key && b != right_key);
            nodes[left_idx] = Node { key: next_key, batch: union, cost };
            next_key += 1;
        }

        (self.environment.logger)(&format!(
            "savings: {merges} merges of {} orders into {} batches, total saving: {total_saving:.3}",
            orders.len(),
            nodes.len()
        ));

        Ok(nodes.into_iter().map(|node| node.batch).collect())
    }

    /// Returns positions of the pair with the cheapest feasible union, none if no pair can be merged.
    fn select_pair(
        &self,
        nodes: &[Node],
        candidates: &mut FxHashMap<(usize, usize), Candidate>,
        now: Timestamp,
    ) -> BatchingResult<Option<(usize, usize)>> {
        let mut best: Option<(usize, usize, Cost)> = None;

        for (i, left) in nodes.iter().enumerate() {
            for (j, right) in nodes.iter().enumerate().skip(i + 1) {
                if !can_merge_batches(&left.batch, &right.batch) {
                    continue;
                }

                let key = (left.key, right.key);
                let cost = match candidates.get(&key) {
                    Some(candidate) => candidate.cost,
                    None => {
                        let union = union_batch(&left.batch, &right.batch)?;
                        let cost = self.objective.batch_fitness(&union, now)?;
                        candidates.insert(key, Candidate { cost, service_time: union.cached_service_time() });
                        cost
                    }
                };

                if best.is_none_or(|(_, _, best_cost)| compare_floats(cost, best_cost) == Ordering::Less) {
                    best = Some((i, j, cost));
                }
            }
        }

        Ok(best.map(|(i, j, _)| (i, j)))
    }
}

impl BatchingAlgorithm for SavingsConstructive {
    fn name(&self) -> &str {
        "savings"
    }

    fn run(&self, orders: &[Arc<Order>]) -> BatchingResult<Vec<Batch>> {
        match orders {
            [] => Ok(vec![]),
            [order] => Ok(vec![create_singleton_batch(order.clone(), self.capacity)?]),
            [first_order, second_order] => {
                let first = create_singleton_batch(first_order.clone(), self.capacity)?;
                let second = create_singleton_batch(second_order.clone(), self.capacity)?;

                if can_add_orders_in_a_batch(first_order, second_order, self.capacity) {
                    Ok(vec![union_batch(&first, &second)?])
                } else {
                    Ok(vec![first, second])
                }
            }
            _ => self.merge_all(orders),
        }
    }
}
