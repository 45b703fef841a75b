//! Questionnaire module - issue catalog, answer scale and scoring.
//!
//! All tables here are compiled-in constants; nothing is mutated
//! while handling requests.

mod answer_scale;
mod errors;
mod issue;
mod scoring;

pub use answer_scale::{weight_or_zero, AnswerOption};
pub use errors::QuestionnaireError;
pub use issue::{Issue, QUESTIONS_PER_ISSUE};
pub use scoring::{AnswerSheet, Assessment, SeverityBand};
