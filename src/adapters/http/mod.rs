//! HTTP adapters - REST API implementations.
//!
//! - `chat` - Questionnaire and conversation endpoints
//! - `router` - Application router, health check and middleware

pub mod chat;
pub mod router;

// Re-export key types for convenience
pub use chat::{chat_routes, ChatAppState};
pub use router::build_router;
