#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use crate::utils::Float;
use rand::prelude::*;
use rand::Error;
use std::sync::{Arc, Mutex, MutexGuard};

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: Float, max: Float) -> Float;

    /// Returns RNG which shares its state with this instance.
    fn get_rng(&self) -> RandomGen;
}

/// A default random implementation.
///
/// All values produced by the instance, including these drawn through `get_rng`, come from one
/// stream, so repeatability is bound to the seed, not to a single call.
pub struct DefaultRandom {
    rng: RandomGen,
}

impl DefaultRandom {
    /// Creates an instance with a fixed seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: RandomGen::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: RandomGen::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max + 1)
    }

    fn uniform_real(&self, min: Float, max: Float) -> Float {
        if (min - max).abs() < Float::EPSILON {
            return min;
        }

        assert!(min < max);
        self.get_rng().gen_range(min..max)
    }

    fn get_rng(&self) -> RandomGen {
        self.rng.clone()
    }
}

/// Specifies underlying random generator type.
#[derive(Clone, Debug)]
pub struct RandomGen {
    rng: Arc<Mutex<SmallRng>>,
}

impl RandomGen {
    /// Creates a new instance of `RandomGen` which owns given small rng.
    pub fn new(rng: SmallRng) -> Self {
        Self { rng: Arc::new(Mutex::new(rng)) }
    }

    fn lock(&self) -> MutexGuard<'_, SmallRng> {
        // NOTE rng state stays valid even if another holder has panicked
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RngCore for RandomGen {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.lock().next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.lock().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.lock().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.lock().try_fill_bytes(dest)
    }
}
