#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::{Batch, Weight};
use crate::utils::Float;
use std::fmt::{Display, Formatter};

/// Keeps aggregated information about a list of batches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolutionStatistics {
    /// Amount of batches.
    pub batches: usize,
    /// Amount of orders over all batches.
    pub orders: usize,
    /// Total weight over all batches.
    pub total_weight: Weight,
    /// Mean fill ratio of batches.
    pub mean_fill_ratio: Float,
    /// Amount of batches without capacity left.
    pub complete_batches: usize,
}

impl SolutionStatistics {
    /// Creates statistics for given batches.
    pub fn new(batches: &[Batch]) -> Self {
        if batches.is_empty() {
            return Self::default();
        }

        Self {
            batches: batches.len(),
            orders: batches.iter().map(|batch| batch.size()).sum(),
            total_weight: batches.iter().map(|batch| batch.weight()).sum(),
            mean_fill_ratio: batches.iter().map(|batch| batch.fill_ratio()).sum::<Float>() / batches.len() as Float,
            complete_batches: batches.iter().filter(|batch| batch.is_full()).count(),
        }
    }
}

impl Display for SolutionStatistics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "batches: {}, orders: {}, total weight: {:.2}, mean fill ratio: {:.3}, complete batches: {}",
            self.batches, self.orders, self.total_weight, self.mean_fill_ratio, self.complete_batches
        )
    }
}
