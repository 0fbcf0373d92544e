//! A collection of models to represent the order batching domain.

use crate::utils::Float;

/// Represents a time duration.
pub type Duration = Float;

/// Represents a timestamp.
pub type Timestamp = Float;

/// Represents a weight of an order or a capacity of a worker.
pub type Weight = Float;

/// Represents a cost value produced by objective functions.
pub type Cost = Float;

mod order;
pub use self::order::*;

mod batch;
pub use self::batch::*;

mod solution;
pub use self::solution::*;
