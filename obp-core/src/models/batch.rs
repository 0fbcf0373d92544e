#[cfg(test)]
#[path = "../../tests/unit/models/batch_test.rs"]
mod batch_test;

use crate::models::{Duration, Order, Timestamp, Weight};
use crate::utils::{BatchingError, BatchingResult, Float, GenericResult};
use rustc_hash::FxHashSet;
use std::cell::Cell;
use std::sync::Arc;

/// Checks whether given weight fits into capacity.
pub fn fits_capacity(weight: Weight, max_weight: Weight) -> bool {
    weight <= max_weight
}

/// Estimates the time needed by a picker to retrieve all orders of the batch.
///
/// Implementation is expected to be a pure function of batch content: the result is cached
/// inside the batch and never requested twice for unchanged orders.
pub trait ServiceTimeOracle: Send + Sync {
    /// Returns service time of the batch.
    fn service_time(&self, batch: &Batch) -> GenericResult<Duration>;
}

impl<F> ServiceTimeOracle for F
where
    F: Fn(&Batch) -> GenericResult<Duration> + Send + Sync,
{
    fn service_time(&self, batch: &Batch) -> GenericResult<Duration> {
        self(batch)
    }
}

/// A group of orders retrieved by one picker in one trip.
///
/// Insertion order of orders is the pickup order.
#[derive(Clone, Debug)]
pub struct Batch {
    max_weight: Weight,
    orders: Vec<Arc<Order>>,
    weight: Weight,
    earliest_arrival_time: Option<Timestamp>,
    service_time: Cell<Option<Duration>>,
}

impl Batch {
    /// Creates an empty batch with given capacity.
    pub fn new(max_weight: Weight) -> Self {
        Self { max_weight, orders: vec![], weight: 0., earliest_arrival_time: None, service_time: Cell::new(None) }
    }

    /// Adds order to the end of the batch. Fails without changing the batch if capacity is exceeded.
    pub fn add_order(&mut self, order: Arc<Order>) -> BatchingResult<()> {
        self.ensure_fits(order.weight)?;

        self.weight += order.weight;
        if self.earliest_arrival_time.is_none_or(|earliest| order.arrival_time < earliest) {
            self.earliest_arrival_time = Some(order.arrival_time);
        }
        self.orders.push(order);
        self.service_time.set(None);

        Ok(())
    }

    /// Appends all orders of the other batch. Fails without changing the batch if combined
    /// weight exceeds capacity.
    pub fn extend(&mut self, other: &Batch) -> BatchingResult<()> {
        self.ensure_fits(other.weight)?;

        self.weight += other.weight;
        self.orders.extend(other.orders.iter().cloned());

        if let Some(other_earliest) = other.earliest_arrival_time {
            if self.earliest_arrival_time.is_none_or(|earliest| other_earliest < earliest) {
                self.earliest_arrival_time = Some(other_earliest);
            }
        }
        self.service_time.set(None);

        Ok(())
    }

    /// Checks whether extra weight can be added to the batch.
    pub fn can_fit(&self, extra: Weight) -> bool {
        fits_capacity(self.weight + extra, self.max_weight)
    }

    /// Recomputes the earliest arrival time from scratch over current orders.
    pub fn recalculate_min_arrival_time(&mut self) {
        self.earliest_arrival_time =
            self.orders.iter().map(|order| order.arrival_time).min_by(|a, b| a.total_cmp(b));
    }

    /// Returns orders in pickup order.
    pub fn orders(&self) -> &[Arc<Order>] {
        self.orders.as_slice()
    }

    /// Returns amount of orders.
    pub fn size(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if batch has no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Returns capacity of the batch.
    pub fn max_weight(&self) -> Weight {
        self.max_weight
    }

    /// Returns total weight of all orders.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns capacity left.
    pub fn available_weight(&self) -> Weight {
        self.max_weight - self.weight
    }

    /// Returns true when no capacity is left.
    pub fn is_full(&self) -> bool {
        self.available_weight() == 0.
    }

    /// Returns ratio of used capacity.
    pub fn fill_ratio(&self) -> Float {
        if self.max_weight > 0. { self.weight / self.max_weight } else { 0. }
    }

    /// Returns the earliest arrival time of the orders, none if batch is empty.
    pub fn earliest_arrival_time(&self) -> Option<Timestamp> {
        self.earliest_arrival_time
    }

    /// Returns amount of distinct products over all orders.
    pub fn distinct_products(&self) -> usize {
        self.orders.iter().flat_map(|order| order.products.iter()).collect::<FxHashSet<_>>().len()
    }

    /// Returns service time, calling the oracle only if it was not computed before.
    pub fn service_time(&self, oracle: &dyn ServiceTimeOracle) -> GenericResult<Duration> {
        if let Some(service_time) = self.service_time.get() {
            return Ok(service_time);
        }

        let service_time = oracle.service_time(self)?;
        self.service_time.set(Some(service_time));

        Ok(service_time)
    }

    /// Returns service time if it is already known.
    pub fn cached_service_time(&self) -> Option<Duration> {
        self.service_time.get()
    }

    /// Sets service time known for the same order content, e.g. computed for an identical union.
    pub(crate) fn restore_service_time(&self, service_time: Option<Duration>) {
        self.service_time.set(service_time);
    }

    fn ensure_fits(&self, extra: Weight) -> BatchingResult<()> {
        if self.can_fit(extra) {
            Ok(())
        } else {
            Err(BatchingError::CapacityExceeded { max_weight: self.max_weight, weight: self.weight, extra })
        }
    }
}
