#[cfg(test)]
#[path = "../../tests/unit/models/order_test.rs"]
mod order_test;

use crate::models::{Timestamp, Weight};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Represents a customer order which has to be picked in the warehouse.
///
/// Orders are read only inputs of a batching run and are shared between batches by reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id, unique within a problem instance.
    pub id: String,
    /// Order weight, a positive value.
    pub weight: Weight,
    /// Absolute due date, in the same unit as arrival time.
    pub due_date: Timestamp,
    /// Time when the order has arrived into the system.
    pub arrival_time: Timestamp,
    /// Products which have to be picked for the order.
    #[serde(default)]
    pub products: Vec<String>,
}

impl Order {
    /// Creates a new order without products.
    pub fn new(id: &str, weight: Weight, due_date: Timestamp, arrival_time: Timestamp) -> Self {
        Self { id: id.to_string(), weight, due_date, arrival_time, products: vec![] }
    }

    /// Sets products of the order.
    pub fn with_products(mut self, products: Vec<String>) -> Self {
        self.products = products;
        self
    }

    /// Returns amount of distinct products in the order.
    pub fn distinct_products(&self) -> usize {
        self.products.iter().collect::<FxHashSet<_>>().len()
    }
}
