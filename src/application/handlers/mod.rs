//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;
pub mod questionnaire;
pub mod support;

pub use conversation::{
    EndChatCommand, EndChatHandler, ReflectOnMoodHandler, ReflectOnMoodQuery, StartChatCommand,
    StartChatHandler,
};
pub use questionnaire::{
    IssueQuestionnaire, SelectIssueHandler, SelectIssueQuery, SubmitAnswersCommand,
    SubmitAnswersHandler,
};
pub use support::{
    AnalyzeThoughtHandler, AnalyzeThoughtQuery, SuggestHobbyHandler, SuggestSelfKindnessHandler,
    ThoughtAnalysis,
};
