#[cfg(test)]
#[path = "../../tests/unit/objectives/due_dates_test.rs"]
mod due_dates_test;

use super::*;
use std::sync::Arc;

/// Specifies which deviation from due date is penalized.
#[derive(Clone, Copy)]
enum Deviation {
    Earliness,
    Tardiness,
    Both,
}

impl Deviation {
    /// Returns total deviation of batch orders from given completion time.
    fn estimate(&self, batch: &Batch, completion: Timestamp) -> Cost {
        batch
            .orders()
            .iter()
            .map(|order| {
                let earliness = (order.due_date - completion).max(0.);
                let tardiness = (completion - order.due_date).max(0.);

                match self {
                    Deviation::Earliness => earliness,
                    Deviation::Tardiness => tardiness,
                    Deviation::Both => earliness + tardiness,
                }
            })
            .sum()
    }
}

/// Shared logic of due date based objectives.
struct DueDateObjective {
    oracle: Arc<dyn ServiceTimeOracle>,
    deviation: Deviation,
}

impl DueDateObjective {
    fn batch_fitness(&self, batch: &Batch, now: Timestamp) -> GenericResult<Cost> {
        let completion = now + batch.service_time(self.oracle.as_ref())?;

        Ok(self.deviation.estimate(batch, completion))
    }

    fn fitness(&self, batches: &[Batch], now: Timestamp) -> GenericResult<Cost> {
        let completion_times = get_completion_times(batches, now, self.oracle.as_ref())?;

        Ok(batches.iter().zip(completion_times).map(|(batch, completion)| self.deviation.estimate(batch, completion)).sum())
    }
}

macro_rules! due_date_objective {
    ($(#[$meta:meta])* $name:ident, $deviation:expr, $label:expr) => {
        $(#[$meta])*
        pub struct $name {
            inner: DueDateObjective,
        }

        impl $name {
            #[doc = concat!("Creates a new instance of `", stringify!($name), "`.")]
            pub fn new(oracle: Arc<dyn ServiceTimeOracle>) -> Self {
                Self { inner: DueDateObjective { oracle, deviation: $deviation } }
            }
        }

        impl ObjectiveFunction for $name {
            fn name(&self) -> &str {
                $label
            }

            fn batch_fitness(&self, batch: &Batch, now: Timestamp) -> GenericResult<Cost> {
                self.inner.batch_fitness(batch, now)
            }

            fn fitness(&self, batches: &[Batch], now: Timestamp) -> GenericResult<Cost> {
                self.inner.fitness(batches, now)
            }
        }
    };
}

due_date_objective!(
    /// Minimizes total time by which orders are completed before their due dates.
    SumEarliness,
    Deviation::Earliness,
    "sum-earliness"
);

due_date_objective!(
    /// Minimizes total time by which orders are completed after their due dates.
    SumTardiness,
    Deviation::Tardiness,
    "sum-tardiness"
);

due_date_objective!(
    /// Minimizes total absolute deviation of completion times from due dates.
    SumEarlinessTardiness,
    Deviation::Both,
    "sum-earliness-tardiness"
);
