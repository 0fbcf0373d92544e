//! The solver module wires sorting, construction, validation and scoring into a single pipeline.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::algebra::validate_solution;
use crate::construction::heuristics::BatchingAlgorithm;
use crate::construction::sorting::SortStrategy;
use crate::models::{Batch, Cost, Order, SolutionStatistics};
use crate::objectives::ObjectiveFunction;
use crate::utils::{BatchingResult, Environment};
use std::sync::Arc;
use std::time::Instant;

mod config;
pub use self::config::*;

/// A result of the batching run.
pub struct BatchingSolution {
    /// Batches in their processing order.
    pub batches: Vec<Batch>,
    /// Objective value of the batch list.
    pub fitness: Cost,
    /// Aggregated information about batches.
    pub statistics: SolutionStatistics,
}

/// Solves the order batching problem: sorts orders, constructs batches, validates and scores them.
pub struct Solver {
    sorting: Arc<dyn SortStrategy>,
    algorithm: Arc<dyn BatchingAlgorithm>,
    objective: Arc<dyn ObjectiveFunction>,
    environment: Arc<Environment>,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(
        sorting: Arc<dyn SortStrategy>,
        algorithm: Arc<dyn BatchingAlgorithm>,
        objective: Arc<dyn ObjectiveFunction>,
        environment: Arc<Environment>,
    ) -> Self {
        Self { sorting, algorithm, objective, environment }
    }

    /// Runs the pipeline for given orders.
    pub fn solve(&self, orders: &[Arc<Order>]) -> BatchingResult<BatchingSolution> {
        let logger = self.environment.logger.as_ref();
        logger(&format!(
            "batching {} orders using sorting '{}', algorithm '{}', objective '{}'",
            orders.len(),
            self.sorting.name(),
            self.algorithm.name(),
            self.objective.name()
        ));

        let started = Instant::now();
        let sorted = self.sorting.sort(orders);
        let batches = self.algorithm.run(&sorted)?;
        logger(&format!("constructed {} batches in {}ms", batches.len(), started.elapsed().as_millis()));

        validate_solution(orders, &batches)?;

        let fitness = self.objective.fitness(&batches, self.environment.now())?;
        let statistics = SolutionStatistics::new(&batches);
        logger(&format!("fitness: {fitness:.3}, {statistics}"));

        Ok(BatchingSolution { batches, fitness, statistics })
    }
}
