//! ReflectOnMoodHandler - Query handler for the daily mood check-in.
//!
//! Classifies the reported feeling and picks one of the canned replies
//! for that class through the injected random source.

use std::sync::Arc;

use crate::domain::conversation::{MoodClass, MoodReflection};
use crate::ports::{choose, RandomSource};

/// Query carrying the user's one-word feeling.
#[derive(Debug, Clone, Default)]
pub struct ReflectOnMoodQuery {
    pub feeling: String,
}

pub type ReflectOnMoodResult = MoodReflection;

/// Handler for mood reflection.
pub struct ReflectOnMoodHandler {
    random: Arc<dyn RandomSource>,
}

impl ReflectOnMoodHandler {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn handle(&self, query: ReflectOnMoodQuery) -> ReflectOnMoodResult {
        let mood = MoodClass::classify(&query.feeling);
        // Every class has at least one reply.
        let response = choose(self.random.as_ref(), mood.replies())
            .copied()
            .unwrap_or_default();

        tracing::debug!(?mood, "reflected on mood");
        MoodReflection { mood, response }
    }
}
