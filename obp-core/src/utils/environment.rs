use crate::models::Timestamp;
use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A logger type which is called with various information regarding the work done by the batching engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// A source of the current time. Time dependent evaluations read it once per run.
pub type Clock = Arc<dyn Fn() -> Timestamp + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,

    /// A clock used to capture "now" for time dependent objectives.
    pub clock: Clock,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger, clock: Clock) -> Self {
        Self { random, logger, clock }
    }

    /// Returns current time as seen by the environment's clock.
    pub fn now(&self) -> Timestamp {
        (self.clock)()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(
            Arc::new(DefaultRandom::default()),
            Arc::new(|msg| println!("{msg}")),
            Arc::new(|| {
                SystemTime::now().duration_since(UNIX_EPOCH).map(|elapsed| elapsed.as_secs_f64()).unwrap_or_default()
            }),
        )
    }
}
