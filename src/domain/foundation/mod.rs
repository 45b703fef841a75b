//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the Mood Guide domain.

mod errors;
mod nickname;

pub use errors::{ErrorCode, ValidationError};
pub use nickname::Nickname;
