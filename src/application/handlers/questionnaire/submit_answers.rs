//! SubmitAnswersHandler - Command handler that scores a completed questionnaire.
//!
//! Unrecognized answer tokens score zero. The answer count is only checked
//! when the handler is built in strict mode.

use crate::domain::foundation::Nickname;
use crate::domain::questionnaire::{AnswerSheet, Assessment, Issue, QuestionnaireError};

/// Command carrying the comma-joined answer letters for an issue.
#[derive(Debug, Clone, Default)]
pub struct SubmitAnswersCommand {
    pub nickname: Nickname,
    pub issue: Option<String>,
    pub answers: String,
}

pub type SubmitAnswersResult = Assessment;

/// Handler for scoring submitted answers.
#[derive(Debug, Clone, Default)]
pub struct SubmitAnswersHandler {
    strict_answer_count: bool,
}

impl SubmitAnswersHandler {
    /// Lenient handler: any number of answers is scored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that rejects submissions whose answer count differs from
    /// the issue's question count.
    pub fn strict() -> Self {
        Self {
            strict_answer_count: true,
        }
    }

    pub fn with_strict_answer_count(strict_answer_count: bool) -> Self {
        Self { strict_answer_count }
    }

    pub fn handle(&self, cmd: SubmitAnswersCommand) -> Result<SubmitAnswersResult, QuestionnaireError> {
        let issue = Issue::resolve(cmd.issue.as_deref())?;
        let sheet = AnswerSheet::parse(&cmd.answers);

        if self.strict_answer_count {
            sheet.ensure_answers_every_question(issue)?;
        }

        let assessment = Assessment::score(issue, &cmd.nickname, &sheet);
        tracing::debug!(
            %issue,
            answers = sheet.len(),
            unrecognized = sheet.unrecognized_count(),
            total_score = assessment.total_score,
            severity = %assessment.severity,
            "answers scored"
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::questionnaire::SeverityBand;

    fn command(issue: &str, answers: &str) -> SubmitAnswersCommand {
        SubmitAnswersCommand {
            nickname: Nickname::new("Ari"),
            issue: Some(issue.to_string()),
            answers: answers.to_string(),
        }
    }

    #[test]
    fn all_a_is_mild() {
        let result = SubmitAnswersHandler::new()
            .handle(command("depression", "A,A,A,A,A,A,A,A,A,A"))
            .unwrap();
        assert_eq!(result.total_score, 0);
        assert_eq!(result.severity, SeverityBand::Mild);
        assert!(result.message.contains("Ari"));
    }

    #[test]
    fn all_c_is_moderate() {
        let result = SubmitAnswersHandler::new()
            .handle(command("anxiety", "C,C,C,C,C,C,C,C,C,C"))
            .unwrap();
        assert_eq!(result.total_score, 20);
        assert_eq!(result.severity, SeverityBand::Moderate);
    }

    #[test]
    fn all_e_is_severe() {
        let result = SubmitAnswersHandler::new()
            .handle(command("eating_disorder", "e,e,e,e,e,e,e,e,e,e"))
            .unwrap();
        assert_eq!(result.total_score, 40);
        assert_eq!(result.severity, SeverityBand::Severe);
    }

    #[test]
    fn boundary_scores_land_in_expected_bands() {
        let handler = SubmitAnswersHandler::new();
        let cases = [
            ("E,E,E,A,A,A,A,A,A,A", 12, SeverityBand::Mild),
            ("E,E,E,B,A,A,A,A,A,A", 13, SeverityBand::Moderate),
            ("E,E,E,E,E,E,A,A,A,A", 24, SeverityBand::Moderate),
            ("E,E,E,E,E,E,B,A,A,A", 25, SeverityBand::Severe),
        ];
        for (answers, score, band) in cases {
            let result = handler.handle(command("depression", answers)).unwrap();
            assert_eq!(result.total_score, score, "{}", answers);
            assert_eq!(result.severity, band, "{}", answers);
        }
    }

    #[test]
    fn unknown_tokens_contribute_zero() {
        let result = SubmitAnswersHandler::new()
            .handle(command("anxiety", "Z,,E,??"))
            .unwrap();
        assert_eq!(result.total_score, 4);
    }

    #[test]
    fn lenient_mode_ignores_answer_count() {
        let result = SubmitAnswersHandler::new().handle(command("anxiety", "D"));
        assert_eq!(result.unwrap().total_score, 3);

        let result = SubmitAnswersHandler::new().handle(command("anxiety", ""));
        assert_eq!(result.unwrap().total_score, 0);
    }

    #[test]
    fn strict_mode_rejects_wrong_answer_count() {
        let err = SubmitAnswersHandler::strict()
            .handle(command("anxiety", "A,B,C,D,E,A,B,C,D"))
            .unwrap_err();
        assert_eq!(
            err,
            QuestionnaireError::Validation(ValidationError::count_mismatch("answers", 10, 9))
        );
    }

    #[test]
    fn strict_mode_accepts_full_sheet() {
        let result = SubmitAnswersHandler::with_strict_answer_count(true)
            .handle(command("anxiety", "A,B,C,D,E,A,B,C,D,E"))
            .unwrap();
        assert_eq!(result.total_score, 20);
    }

    #[test]
    fn invalid_issue_is_rejected_before_scoring() {
        let err = SubmitAnswersHandler::strict()
            .handle(command("grief", "not even letters"))
            .unwrap_err();
        assert_eq!(err, QuestionnaireError::InvalidIssue("grief".to_string()));
    }

    #[test]
    fn missing_issue_is_rejected() {
        let err = SubmitAnswersHandler::new()
            .handle(SubmitAnswersCommand::default())
            .unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidIssue(_)));
    }
}
