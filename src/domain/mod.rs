//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (nickname, validation errors)
//! - `questionnaire` - Issue catalog, answer scale, scoring and severity bands
//! - `conversation` - Greeting, mood classification and farewell
//! - `support` - Cognitive distortions, self-kindness ideas and hobbies

pub mod conversation;
pub mod foundation;
pub mod questionnaire;
pub mod support;
