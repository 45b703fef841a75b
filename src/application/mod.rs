//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers produce messages addressed to the user; query handlers
//! read the static catalogs.

pub mod handlers;

pub use handlers::{
    AnalyzeThoughtHandler, EndChatHandler, ReflectOnMoodHandler, SelectIssueHandler,
    StartChatHandler, SubmitAnswersHandler, SuggestHobbyHandler, SuggestSelfKindnessHandler,
};
