//! Questionnaire handlers - issue selection and answer scoring.

mod select_issue;
mod submit_answers;

pub use select_issue::{IssueQuestionnaire, SelectIssueHandler, SelectIssueQuery, SelectIssueResult};
pub use submit_answers::{SubmitAnswersCommand, SubmitAnswersHandler, SubmitAnswersResult};
