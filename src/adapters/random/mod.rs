//! Random source adapters.

mod seeded_random;
mod thread_random;

use std::sync::Arc;

pub use seeded_random::SeededRandomSource;
pub use thread_random::ThreadRandomSource;

use crate::ports::RandomSource;

/// Builds the random source for the given optional seed.
pub fn random_source_from_seed(seed: Option<u64>) -> Arc<dyn RandomSource> {
    match seed {
        Some(seed) => Arc::new(SeededRandomSource::new(seed)),
        None => Arc::new(ThreadRandomSource::new()),
    }
}
