//! Seeded RNG implementation of the random source port.
//!
//! Used when `questionnaire.random_seed` is configured, e.g. for demos
//! and reproducible smoke tests.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Deterministic random source; draws are serialized through a mutex.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn index_below(&self, upper: usize) -> usize {
        // A panic while drawing cannot leave the RNG in a bad state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..upper)
    }
}
