//! HTTP handlers for chat endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::adapters::random::random_source_from_seed;
use crate::application::handlers::{
    AnalyzeThoughtHandler, AnalyzeThoughtQuery, EndChatCommand, EndChatHandler,
    ReflectOnMoodHandler, ReflectOnMoodQuery, SelectIssueHandler, SelectIssueQuery,
    StartChatCommand, StartChatHandler, SubmitAnswersCommand, SubmitAnswersHandler,
    SuggestHobbyHandler, SuggestSelfKindnessHandler,
};
use crate::config::QuestionnaireConfig;
use crate::domain::foundation::ErrorCode;
use crate::domain::questionnaire::QuestionnaireError;
use crate::ports::RandomSource;

use super::dto::{
    AnalyzeThoughtRequest, AssessmentResponse, ErrorResponse, MessageResponse,
    MoodCheckInRequest, MoodReflectionResponse, NicknameRequest, QuestionsResponse,
    SelectIssueRequest, SubmitAnswersRequest, SuggestionResponse, ThoughtAnalysisResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Chat API error that implements IntoResponse.
#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(ErrorResponse),
    /// Body could not be read as JSON; keeps axum's status (400, 415 or 422).
    InvalidBody(StatusCode, ErrorResponse),
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            ChatApiError::InvalidBody(status, error) => (status, error),
        };
        (status, Json(error)).into_response()
    }
}

impl From<QuestionnaireError> for ChatApiError {
    fn from(error: QuestionnaireError) -> Self {
        let body = ErrorResponse::new(error.code(), error.to_string());
        match error {
            QuestionnaireError::InvalidIssue(issue) => {
                ChatApiError::BadRequest(body.with_details(json!({ "issue": issue })))
            }
            QuestionnaireError::Validation(validation) => {
                ChatApiError::BadRequest(body.with_details(json!({ "field": validation.field() })))
            }
        }
    }
}

impl From<JsonRejection> for ChatApiError {
    fn from(rejection: JsonRejection) -> Self {
        ChatApiError::InvalidBody(
            rejection.status(),
            ErrorResponse::new(ErrorCode::InvalidRequestBody, rejection.body_text()),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing chat dependencies.
#[derive(Clone)]
pub struct ChatAppState {
    pub random: Arc<dyn RandomSource>,
    pub strict_answer_count: bool,
}

impl ChatAppState {
    pub fn new(random: Arc<dyn RandomSource>, strict_answer_count: bool) -> Self {
        Self {
            random,
            strict_answer_count,
        }
    }

    pub fn from_config(config: &QuestionnaireConfig) -> Self {
        Self::new(
            random_source_from_seed(config.random_seed),
            config.strict_answer_count,
        )
    }

    pub fn start_chat_handler(&self) -> StartChatHandler {
        StartChatHandler::new()
    }

    pub fn reflect_on_mood_handler(&self) -> ReflectOnMoodHandler {
        ReflectOnMoodHandler::new(self.random.clone())
    }

    pub fn select_issue_handler(&self) -> SelectIssueHandler {
        SelectIssueHandler::new()
    }

    pub fn submit_answers_handler(&self) -> SubmitAnswersHandler {
        SubmitAnswersHandler::with_strict_answer_count(self.strict_answer_count)
    }

    pub fn analyze_thought_handler(&self) -> AnalyzeThoughtHandler {
        AnalyzeThoughtHandler::new()
    }

    pub fn suggest_self_kindness_handler(&self) -> SuggestSelfKindnessHandler {
        SuggestSelfKindnessHandler::new(self.random.clone())
    }

    pub fn suggest_hobby_handler(&self) -> SuggestHobbyHandler {
        SuggestHobbyHandler::new(self.random.clone())
    }

    pub fn end_chat_handler(&self) -> EndChatHandler {
        EndChatHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /start_chatbot
pub async fn start_chatbot(
    State(state): State<ChatAppState>,
    payload: Result<Json<NicknameRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ChatApiError> {
    let Json(req) = payload?;
    let message = state.start_chat_handler().handle(StartChatCommand {
        nickname: req.nickname,
    });
    Ok(Json(message.into()))
}

/// POST /chat_about_day
///
/// A missing feeling is treated as empty text and gets the fallback reply.
pub async fn chat_about_day(
    State(state): State<ChatAppState>,
    payload: Result<Json<MoodCheckInRequest>, JsonRejection>,
) -> Result<Json<MoodReflectionResponse>, ChatApiError> {
    let Json(req) = payload?;
    let reflection = state.reflect_on_mood_handler().handle(ReflectOnMoodQuery {
        feeling: req.feeling.unwrap_or_default(),
    });
    Ok(Json(reflection.into()))
}

/// POST /select_issue
pub async fn select_issue(
    State(state): State<ChatAppState>,
    payload: Result<Json<SelectIssueRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, ChatApiError> {
    let Json(req) = payload?;
    let questionnaire = state
        .select_issue_handler()
        .handle(SelectIssueQuery { issue: req.issue })?;
    Ok(Json(questionnaire.into()))
}

/// POST /submit_answers
pub async fn submit_answers(
    State(state): State<ChatAppState>,
    payload: Result<Json<SubmitAnswersRequest>, JsonRejection>,
) -> Result<Json<AssessmentResponse>, ChatApiError> {
    let Json(req) = payload?;
    let assessment = state.submit_answers_handler().handle(SubmitAnswersCommand {
        nickname: req.nickname,
        issue: req.issue,
        answers: req.answers.unwrap_or_default(),
    })?;
    Ok(Json(assessment.into()))
}

/// POST /analyze_thought
pub async fn analyze_thought(
    State(state): State<ChatAppState>,
    payload: Result<Json<AnalyzeThoughtRequest>, JsonRejection>,
) -> Result<Json<ThoughtAnalysisResponse>, ChatApiError> {
    let Json(req) = payload?;
    let analysis = state
        .analyze_thought_handler()
        .handle(AnalyzeThoughtQuery { thought: req.thought });
    Ok(Json(analysis.into()))
}

/// GET|POST /self_kindness
///
/// Any request body is ignored.
pub async fn self_kindness(State(state): State<ChatAppState>) -> Json<SuggestionResponse> {
    Json(SuggestionResponse {
        suggestion: state.suggest_self_kindness_handler().handle(),
    })
}

/// GET /hobby_suggestion
pub async fn hobby_suggestion(State(state): State<ChatAppState>) -> Json<SuggestionResponse> {
    Json(SuggestionResponse {
        suggestion: state.suggest_hobby_handler().handle(),
    })
}

/// POST /end_chat
pub async fn end_chat(
    State(state): State<ChatAppState>,
    payload: Result<Json<NicknameRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ChatApiError> {
    let Json(req) = payload?;
    let message = state.end_chat_handler().handle(EndChatCommand {
        nickname: req.nickname,
    });
    Ok(Json(message.into()))
}

/// GET /end_chat?nickname=...
pub async fn end_chat_query(
    State(state): State<ChatAppState>,
    Query(req): Query<NicknameRequest>,
) -> Json<MessageResponse> {
    let message = state.end_chat_handler().handle(EndChatCommand {
        nickname: req.nickname,
    });
    Json(message.into())
}
