//! EndChatHandler - Command handler that closes the chat.

use crate::domain::conversation::farewell;
use crate::domain::foundation::Nickname;

#[derive(Debug, Clone, Default)]
pub struct EndChatCommand {
    pub nickname: Nickname,
}

pub type EndChatResult = String;

#[derive(Debug, Clone, Default)]
pub struct EndChatHandler;

impl EndChatHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: EndChatCommand) -> EndChatResult {
        farewell(&cmd.nickname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn farewell_addresses_nickname() {
        let message = EndChatHandler::new().handle(EndChatCommand {
            nickname: Nickname::new("Lee"),
        });
        assert_eq!(
            message,
            "Thank you for talking with me today, Lee. Remember, it's okay to reach out for help if you need it."
        );
    }

    #[test]
    fn farewell_accepts_empty_nickname() {
        let message = EndChatHandler::new().handle(EndChatCommand::default());
        assert!(message.starts_with("Thank you for talking with me today, ."));
    }
}
