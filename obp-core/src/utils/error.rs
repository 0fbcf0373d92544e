#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::Weight;
use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

/// Specifies failures which can happen while batches are built, merged, validated or scored.
#[derive(Clone, Debug, PartialEq)]
pub enum BatchingError {
    /// Adding orders to a batch would exceed its maximum weight. The batch is left untouched.
    CapacityExceeded {
        /// Maximum weight of the batch.
        max_weight: Weight,
        /// Current weight of the batch.
        weight: Weight,
        /// Weight which was requested to be added.
        extra: Weight,
    },

    /// A single order is heavier than the worker capacity, so no batch can ever hold it.
    UnassignableOrder {
        /// Order id.
        order_id: String,
        /// Order weight.
        weight: Weight,
        /// Worker capacity.
        max_weight: Weight,
    },

    /// A finished list of batches does not cover every order exactly once.
    SolutionInvalid(String),

    /// A service time oracle has failed.
    Oracle(GenericError),
}

/// A type alias for result type with `BatchingError`.
pub type BatchingResult<T> = Result<T, BatchingError>;

impl Display for BatchingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchingError::CapacityExceeded { max_weight, weight, extra } => {
                write!(f, "capacity exceeded: batch weight {weight} + {extra} is greater than {max_weight}")
            }
            BatchingError::UnassignableOrder { order_id, weight, max_weight } => write!(
                f,
                "single order exceeds maximum batch capacity: order '{order_id}' has weight {weight}, capacity is {max_weight}"
            ),
            BatchingError::SolutionInvalid(msg) => write!(f, "invalid solution: {msg}"),
            BatchingError::Oracle(err) => write!(f, "cannot compute service time: {err}"),
        }
    }
}

impl std::error::Error for BatchingError {}

impl From<GenericError> for BatchingError {
    fn from(value: GenericError) -> Self {
        BatchingError::Oracle(value)
    }
}

impl From<BatchingError> for GenericError {
    fn from(value: BatchingError) -> Self {
        GenericError(value.to_string())
    }
}
