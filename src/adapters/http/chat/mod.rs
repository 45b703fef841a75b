//! Chat HTTP adapter module.
//!
//! Provides the REST endpoints for the conversational questionnaire.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{ChatApiError, ChatAppState};
pub use routes::chat_routes;
