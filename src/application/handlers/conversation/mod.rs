//! Conversation handlers - greeting, mood check-in and farewell.

mod end_chat;
mod reflect_on_mood;
mod start_chat;

pub use end_chat::{EndChatCommand, EndChatHandler, EndChatResult};
pub use reflect_on_mood::{ReflectOnMoodHandler, ReflectOnMoodQuery, ReflectOnMoodResult};
pub use start_chat::{StartChatCommand, StartChatHandler, StartChatResult};
