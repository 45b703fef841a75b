//! StartChatHandler - Command handler that greets the user.

use crate::domain::conversation::greeting;
use crate::domain::foundation::Nickname;

/// Command to open a chat.
#[derive(Debug, Clone, Default)]
pub struct StartChatCommand {
    pub nickname: Nickname,
}

/// Result of opening a chat: the greeting line.
pub type StartChatResult = String;

/// Handler for opening a chat.
#[derive(Debug, Clone, Default)]
pub struct StartChatHandler;

impl StartChatHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: StartChatCommand) -> StartChatResult {
        tracing::debug!(nickname_len = cmd.nickname.as_str().len(), "starting chat");
        greeting(&cmd.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_with_nickname() {
        let handler = StartChatHandler::new();
        let message = handler.handle(StartChatCommand {
            nickname: Nickname::new("Mo"),
        });
        assert_eq!(
            message,
            "Hello, Mo! I'm here to help you understand your feelings better."
        );
    }

    #[test]
    fn greets_empty_nickname_without_error() {
        let message = StartChatHandler::new().handle(StartChatCommand::default());
        assert!(message.starts_with("Hello, !"));
    }
}
