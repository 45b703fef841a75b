//! Conversation module - greeting, mood check-in and farewell.

mod messages;
mod mood;

pub use messages::{farewell, greeting};
pub use mood::{MoodClass, MoodReflection};
