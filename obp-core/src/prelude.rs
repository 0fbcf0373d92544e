//! This module reimports a common used types.

pub use crate::construction::algebra::{can_add_order_to_batch, can_add_orders_in_a_batch, union_batch, validate_solution};
pub use crate::construction::heuristics::{BasicConstructive, BatchingAlgorithm, SavingsConstructive};
pub use crate::construction::sorting::{NoSort, SortByDueDate, SortByWeight, SortRandom, SortStrategy};

pub use crate::models::{Batch, Cost, Duration, Order, ServiceTimeOracle, SolutionStatistics, Timestamp, Weight};

pub use crate::objectives::ObjectiveFunction;

pub use crate::solver::{BatchingConfig, BatchingSolution, Solver, create_solver, read_config};

pub use crate::utils::{BatchingError, BatchingResult, GenericError, GenericResult};
pub use crate::utils::{DefaultRandom, Environment, Float, InfoLogger, Random, compare_floats};
