//! HTTP routes for chat endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    analyze_thought, chat_about_day, end_chat, end_chat_query, hobby_suggestion, select_issue,
    self_kindness, start_chatbot, submit_answers, ChatAppState,
};

/// Creates the chat router with all routes.
///
/// Routes:
/// - `POST /start_chatbot` - Greet the user
/// - `POST /chat_about_day` - Reflect on a one-word mood
/// - `POST /select_issue` - Questions for an issue
/// - `POST /submit_answers` - Score answers into a severity band
/// - `POST /analyze_thought` - Echo a thought with the distortion catalog
/// - `GET|POST /self_kindness` - One self-kindness idea
/// - `GET /hobby_suggestion` - One hobby idea
/// - `GET|POST /end_chat` - Closing message
pub fn chat_routes(state: ChatAppState) -> Router {
    Router::new()
        .route("/start_chatbot", post(start_chatbot))
        .route("/chat_about_day", post(chat_about_day))
        .route("/select_issue", post(select_issue))
        .route("/submit_answers", post(submit_answers))
        .route("/analyze_thought", post(analyze_thought))
        .route("/self_kindness", get(self_kindness).post(self_kindness))
        .route("/hobby_suggestion", get(hobby_suggestion))
        .route("/end_chat", get(end_chat_query).post(end_chat))
        .with_state(state)
}
