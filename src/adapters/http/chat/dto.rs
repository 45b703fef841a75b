//! HTTP DTOs for chat endpoints.
//!
//! Every request field is optional on the wire. Operations that used to share
//! a generic `answer` field now have their own field name and still accept
//! `answer` as an alias.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::application::handlers::{IssueQuestionnaire, ThoughtAnalysis};
use crate::domain::conversation::{MoodClass, MoodReflection};
use crate::domain::foundation::Nickname;
use crate::domain::questionnaire::{AnswerOption, Assessment, Issue, SeverityBand};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body (or query) carrying only the nickname.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NicknameRequest {
    #[serde(default)]
    pub nickname: Nickname,
}

/// Mood check-in request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodCheckInRequest {
    #[serde(default, alias = "answer")]
    pub feeling: Option<String>,
}

/// Issue selection request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectIssueRequest {
    #[serde(default)]
    pub issue: Option<String>,
}

/// Answer submission request; `answers` is a comma-joined list of letters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitAnswersRequest {
    #[serde(default)]
    pub nickname: Nickname,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default, alias = "answer")]
    pub answers: Option<String>,
}

/// Thought analysis request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeThoughtRequest {
    #[serde(default, alias = "answer")]
    pub thought: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl From<String> for MessageResponse {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodReflectionResponse {
    pub response: String,
    pub mood: MoodClass,
}

impl From<MoodReflection> for MoodReflectionResponse {
    fn from(reflection: MoodReflection) -> Self {
        Self {
            response: reflection.response.to_string(),
            mood: reflection.mood,
        }
    }
}

/// One choice on the answer scale.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerOptionView {
    pub code: String,
    pub label: &'static str,
    pub weight: u32,
}

impl From<AnswerOption> for AnswerOptionView {
    fn from(option: AnswerOption) -> Self {
        Self {
            code: option.code().to_string(),
            label: option.label(),
            weight: option.weight(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub issue: Issue,
    pub questions: Vec<&'static str>,
    pub options: Vec<AnswerOptionView>,
}

impl From<IssueQuestionnaire> for QuestionsResponse {
    fn from(questionnaire: IssueQuestionnaire) -> Self {
        Self {
            issue: questionnaire.issue,
            questions: questionnaire.questions.to_vec(),
            options: questionnaire.options.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub message: String,
    pub total_score: u32,
    pub severity: SeverityBand,
}

impl From<Assessment> for AssessmentResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            message: assessment.message,
            total_score: assessment.total_score,
            severity: assessment.severity,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ThoughtAnalysisResponse {
    pub thought: Option<String>,
    pub cognitive_distortions: &'static BTreeMap<&'static str, &'static str>,
}

impl From<ThoughtAnalysis> for ThoughtAnalysisResponse {
    fn from(analysis: ThoughtAnalysis) -> Self {
        Self {
            thought: analysis.thought,
            cognitive_distortions: analysis.cognitive_distortions,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submit_request_accepts_legacy_answer_field() {
        let req: SubmitAnswersRequest = serde_json::from_value(json!({
            "nickname": "Pat",
            "issue": "anxiety",
            "answer": "A,B"
        }))
        .unwrap();
        assert_eq!(req.nickname.as_str(), "Pat");
        assert_eq!(req.issue.as_deref(), Some("anxiety"));
        assert_eq!(req.answers.as_deref(), Some("A,B"));
    }

    #[test]
    fn mood_request_accepts_both_field_names() {
        let named: MoodCheckInRequest =
            serde_json::from_value(json!({ "feeling": "happy" })).unwrap();
        let legacy: MoodCheckInRequest =
            serde_json::from_value(json!({ "nickname": "x", "answer": "happy" })).unwrap();
        assert_eq!(named.feeling.as_deref(), Some("happy"));
        assert_eq!(legacy.feeling.as_deref(), Some("happy"));
    }

    #[test]
    fn empty_body_fields_default() {
        let req: SubmitAnswersRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.nickname.is_empty());
        assert!(req.issue.is_none());
        assert!(req.answers.is_none());

        let req: NicknameRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.nickname.is_empty());
    }

    #[test]
    fn answer_option_view_uses_letter_code() {
        let view = AnswerOptionView::from(AnswerOption::Often);
        let value = serde_json::to_value(view).unwrap();
        assert_eq!(value, json!({ "code": "D", "label": "Often", "weight": 3 }));
    }

    #[test]
    fn error_response_omits_missing_details() {
        let value = serde_json::to_value(ErrorResponse::new("INVALID_ISSUE", "Invalid issue selected.")).unwrap();
        assert_eq!(
            value,
            json!({ "code": "INVALID_ISSUE", "message": "Invalid issue selected." })
        );
    }
}
