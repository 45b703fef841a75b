//! Thread-local RNG implementation of the random source port.

use rand::Rng;

use crate::ports::RandomSource;

/// Draws from `rand::thread_rng()`; no seeding or reproducibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn index_below(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}
