//! Specifies order sorting strategies which are applied before batches are constructed.

#[cfg(test)]
#[path = "../../tests/unit/construction/sorting_test.rs"]
mod sorting_test;

use crate::models::Order;
use crate::utils::{DefaultRandom, Float, Random, compare_floats};
use rand::prelude::SliceRandom;
use std::sync::Arc;

/// Specifies an ordering policy over orders.
pub trait SortStrategy: Send + Sync {
    /// Returns a name of the strategy.
    fn name(&self) -> &str;

    /// Returns a new sorted sequence of orders, the input is left unmodified.
    fn sort(&self, orders: &[Arc<Order>]) -> Vec<Arc<Order>>;

    /// Returns a scalar value used for ordering.
    fn value(&self, order: &Order) -> Float;
}

/// Keeps orders in their original sequence.
#[derive(Default)]
pub struct NoSort {}

impl SortStrategy for NoSort {
    fn name(&self) -> &str {
        "none"
    }

    fn sort(&self, orders: &[Arc<Order>]) -> Vec<Arc<Order>> {
        orders.to_vec()
    }

    fn value(&self, _: &Order) -> Float {
        0.
    }
}

/// Sorts orders by their weight using stable sort.
pub struct SortByWeight {
    descending: bool,
}

impl SortByWeight {
    /// Creates a strategy which puts lighter orders first.
    pub fn ascending() -> Self {
        Self { descending: false }
    }

    /// Creates a strategy which puts heavier orders first.
    pub fn descending() -> Self {
        Self { descending: true }
    }
}

impl Default for SortByWeight {
    fn default() -> Self {
        Self::ascending()
    }
}

impl SortStrategy for SortByWeight {
    fn name(&self) -> &str {
        if self.descending { "weight-desc" } else { "weight" }
    }

    fn sort(&self, orders: &[Arc<Order>]) -> Vec<Arc<Order>> {
        let mut orders = orders.to_vec();

        orders.sort_by(|a, b| {
            let ordering = compare_floats(self.value(a), self.value(b));
            if self.descending { ordering.reverse() } else { ordering }
        });

        orders
    }

    fn value(&self, order: &Order) -> Float {
        order.weight
    }
}

/// Sorts orders by their due date, earliest first.
#[derive(Default)]
pub struct SortByDueDate {}

impl SortStrategy for SortByDueDate {
    fn name(&self) -> &str {
        "due-date"
    }

    fn sort(&self, orders: &[Arc<Order>]) -> Vec<Arc<Order>> {
        let mut orders = orders.to_vec();
        orders.sort_by(|a, b| compare_floats(self.value(a), self.value(b)));

        orders
    }

    fn value(&self, order: &Order) -> Float {
        order.due_date
    }
}

/// Shuffles orders.
///
/// Sorting and values share one random stream: two successive calls on the same instance
/// produce different results unless the generator is recreated with the same seed.
pub struct SortRandom {
    random: Arc<dyn Random>,
}

impl SortRandom {
    /// Creates a new instance of `SortRandom` which draws values from given random.
    pub fn new(random: Arc<dyn Random>) -> Self {
        Self { random }
    }

    /// Creates a new instance of `SortRandom` with a seeded generator.
    pub fn new_repeatable(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)))
    }
}

impl SortStrategy for SortRandom {
    fn name(&self) -> &str {
        "random"
    }

    fn sort(&self, orders: &[Arc<Order>]) -> Vec<Arc<Order>> {
        let mut orders = orders.to_vec();
        orders.shuffle(&mut self.random.get_rng());

        orders
    }

    fn value(&self, _: &Order) -> Float {
        self.random.uniform_real(0., 1.)
    }
}
