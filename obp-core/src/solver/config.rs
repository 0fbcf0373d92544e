//! Batching configuration.

#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use super::Solver;
use crate::construction::heuristics::*;
use crate::construction::sorting::*;
use crate::models::{ServiceTimeOracle, Weight};
use crate::objectives::*;
use crate::utils::{Environment, GenericResult};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A batching configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct BatchingConfig {
    /// Worker capacity: max weight of a batch.
    pub capacity: Weight,
    /// Specifies how orders are sorted before construction. Default is no sorting.
    pub sorting: Option<SortingType>,
    /// Specifies constructive heuristic.
    pub algorithm: AlgorithmType,
    /// Specifies objective function.
    pub objective: ObjectiveType,
}

/// A sorting strategy configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum SortingType {
    /// Orders are kept as is.
    #[serde(rename(deserialize = "none"))]
    None,
    /// Orders are sorted by weight, ascending by default.
    #[serde(rename(deserialize = "weight"))]
    Weight {
        /// Sort heavier orders first.
        descending: Option<bool>,
    },
    /// Orders are sorted by due date.
    #[serde(rename(deserialize = "due-date"))]
    DueDate,
    /// Orders are shuffled.
    #[serde(rename(deserialize = "random"))]
    Random {
        /// A seed of the random generator. If omitted, environment's random is used.
        seed: Option<u64>,
    },
}

/// A constructive heuristic configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum AlgorithmType {
    /// Greedy construction.
    #[serde(rename(deserialize = "basic"))]
    Basic {
        /// Use first-fit over all open batches instead of the last one only.
        compact: bool,
    },
    /// Savings based merging.
    #[serde(rename(deserialize = "savings"))]
    Savings,
}

/// An objective function configuration.
#[derive(Clone, Deserialize, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ObjectiveType {
    #[serde(rename(deserialize = "picking-time"))]
    PickingTime,
    #[serde(rename(deserialize = "picking-time-by-weight"))]
    PickingTimeByWeight,
    #[serde(rename(deserialize = "num-complete-batches"))]
    NumCompleteBatches,
    #[serde(rename(deserialize = "max-throughput-time"))]
    MaxThroughputTime,
    #[serde(rename(deserialize = "sum-earliness"))]
    SumEarliness,
    #[serde(rename(deserialize = "sum-tardiness"))]
    SumTardiness,
    #[serde(rename(deserialize = "sum-earliness-tardiness"))]
    SumEarlinessTardiness,
    #[serde(rename(deserialize = "sum-abs-diff-batch-times"))]
    SumAbsoluteDiffBatchTimes,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<BatchingConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a solver from the config.
pub fn create_solver(
    config: &BatchingConfig,
    oracle: Arc<dyn ServiceTimeOracle>,
    environment: Arc<Environment>,
) -> GenericResult<Solver> {
    if !(config.capacity.is_finite() && config.capacity > 0.) {
        return Err(format!("capacity must be a positive number, got: {}", config.capacity).into());
    }

    let sorting = create_sorting(config.sorting.as_ref(), environment.as_ref());
    let objective = create_objective(&config.objective, oracle);

    let algorithm: Arc<dyn BatchingAlgorithm> = match &config.algorithm {
        AlgorithmType::Basic { compact } => Arc::new(BasicConstructive::new(config.capacity, *compact)),
        AlgorithmType::Savings => {
            Arc::new(SavingsConstructive::new(objective.clone(), config.capacity, environment.clone()))
        }
    };

    Ok(Solver::new(sorting, algorithm, objective, environment))
}

fn create_sorting(sorting: Option<&SortingType>, environment: &Environment) -> Arc<dyn SortStrategy> {
    match sorting {
        None | Some(SortingType::None) => Arc::new(NoSort::default()),
        Some(SortingType::Weight { descending }) => {
            if descending.unwrap_or(false) {
                Arc::new(SortByWeight::descending())
            } else {
                Arc::new(SortByWeight::ascending())
            }
        }
        Some(SortingType::DueDate) => Arc::new(SortByDueDate::default()),
        Some(SortingType::Random { seed: Some(seed) }) => Arc::new(SortRandom::new_repeatable(*seed)),
        Some(SortingType::Random { seed: None }) => Arc::new(SortRandom::new(environment.random.clone())),
    }
}

fn create_objective(objective: &ObjectiveType, oracle: Arc<dyn ServiceTimeOracle>) -> Arc<dyn ObjectiveFunction> {
    match objective {
        ObjectiveType::PickingTime => Arc::new(PickingTime::new(oracle)),
        ObjectiveType::PickingTimeByWeight => Arc::new(PickingTimeByWeight::new(oracle)),
        ObjectiveType::NumCompleteBatches => Arc::new(NumCompleteBatches::default()),
        ObjectiveType::MaxThroughputTime => Arc::new(MaxThroughputTime::new(oracle)),
        ObjectiveType::SumEarliness => Arc::new(SumEarliness::new(oracle)),
        ObjectiveType::SumTardiness => Arc::new(SumTardiness::new(oracle)),
        ObjectiveType::SumEarlinessTardiness => Arc::new(SumEarlinessTardiness::new(oracle)),
        ObjectiveType::SumAbsoluteDiffBatchTimes => Arc::new(SumAbsoluteDiffBatchTimes::new(oracle)),
    }
}
