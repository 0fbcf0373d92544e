//! Core crate contains building blocks to solve the ***Order Batching Problem***: group warehouse
//! orders into capacity bounded batches, each retrieved by one picker in one trip.
//!
//! The crate provides:
//! - constructive heuristics: greedy first-fit/last-fit packing and savings based merging
//! - a family of objective functions which score a batch or a list of batches, time based ones
//!   use an external service time oracle and an explicitly passed evaluation time
//! - batch algebra: feasibility checks, union and solution validation
//!
//! # Examples
//!
//! ```
//! use obp_core::prelude::*;
//! use std::sync::Arc;
//!
//! let orders = vec![
//!     Arc::new(Order::new("A", 3., 100., 0.)),
//!     Arc::new(Order::new("B", 4., 100., 0.)),
//!     Arc::new(Order::new("C", 5., 100., 0.)),
//! ];
//!
//! let batches = BasicConstructive::new(7., true).run(&orders).unwrap();
//!
//! assert_eq!(batches.len(), 2);
//! assert_eq!(batches[0].size(), 2);
//! assert!(validate_solution(&orders, &batches).is_ok());
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod objectives;
pub mod prelude;
pub mod solver;
pub mod utils;
