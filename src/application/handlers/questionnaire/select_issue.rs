//! SelectIssueHandler - Query handler returning the questions for an issue.

use crate::domain::questionnaire::{AnswerOption, Issue, QuestionnaireError};

/// Query naming the issue to assess. `None` is rejected as invalid.
#[derive(Debug, Clone, Default)]
pub struct SelectIssueQuery {
    pub issue: Option<String>,
}

/// Questions (and the scale to answer them with) for one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueQuestionnaire {
    pub issue: Issue,
    pub questions: &'static [&'static str],
    pub options: [AnswerOption; 5],
}

pub type SelectIssueResult = IssueQuestionnaire;

#[derive(Debug, Clone, Default)]
pub struct SelectIssueHandler;

impl SelectIssueHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: SelectIssueQuery) -> Result<SelectIssueResult, QuestionnaireError> {
        let issue = Issue::resolve(query.issue.as_deref()).map_err(|err| {
            tracing::debug!(requested = ?query.issue, "rejected unknown issue");
            err
        })?;

        tracing::debug!(%issue, "issue selected");
        Ok(IssueQuestionnaire {
            issue,
            questions: issue.questions(),
            options: AnswerOption::ALL,
        })
    }
}
