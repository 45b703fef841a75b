//! Support handlers - thought analysis and canned suggestions.

mod analyze_thought;
mod suggest_hobby;
mod suggest_self_kindness;

pub use analyze_thought::{AnalyzeThoughtHandler, AnalyzeThoughtQuery, AnalyzeThoughtResult, ThoughtAnalysis};
pub use suggest_hobby::{SuggestHobbyHandler, SuggestHobbyResult};
pub use suggest_self_kindness::{SuggestSelfKindnessHandler, SuggestSelfKindnessResult};
