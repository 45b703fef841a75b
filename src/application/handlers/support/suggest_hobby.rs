//! SuggestHobbyHandler - Query handler returning one hobby idea.

use std::sync::Arc;

use crate::domain::support::HOBBY_SUGGESTIONS;
use crate::ports::{choose, RandomSource};

pub type SuggestHobbyResult = &'static str;

pub struct SuggestHobbyHandler {
    random: Arc<dyn RandomSource>,
}

impl SuggestHobbyHandler {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn handle(&self) -> SuggestHobbyResult {
        let suggestion = choose(self.random.as_ref(), &HOBBY_SUGGESTIONS)
            .copied()
            .unwrap_or_default();
        tracing::debug!(suggestion, "hobby suggested");
        suggestion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Replays a fixed script of indices.
    struct ScriptedSource {
        script: Mutex<Vec<usize>>,
    }

    impl RandomSource for ScriptedSource {
        fn index_below(&self, _upper: usize) -> usize {
            self.script.lock().unwrap().pop().unwrap_or(0)
        }
    }

    #[test]
    fn every_hobby_is_reachable() {
        let script: Vec<usize> = (0..HOBBY_SUGGESTIONS.len()).rev().collect();
        let handler = SuggestHobbyHandler::new(Arc::new(ScriptedSource {
            script: Mutex::new(script),
        }));

        let drawn: Vec<&str> = (0..HOBBY_SUGGESTIONS.len()).map(|_| handler.handle()).collect();
        assert_eq!(drawn, HOBBY_SUGGESTIONS.to_vec());
    }
}
