//! SuggestSelfKindnessHandler - Query handler returning one self-kindness idea.

use std::sync::Arc;

use crate::domain::support::SELF_KINDNESS_IDEAS;
use crate::ports::{choose, RandomSource};

pub type SuggestSelfKindnessResult = &'static str;

pub struct SuggestSelfKindnessHandler {
    random: Arc<dyn RandomSource>,
}

impl SuggestSelfKindnessHandler {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn handle(&self) -> SuggestSelfKindnessResult {
        choose(self.random.as_ref(), &SELF_KINDNESS_IDEAS)
            .copied()
            .unwrap_or_default()
    }
}
