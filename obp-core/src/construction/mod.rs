//! The construction module contains building blocks to turn a list of orders into a list of batches.

pub mod algebra;
pub mod heuristics;
pub mod sorting;
