//! Opening and closing lines of a chat.

use crate::domain::foundation::Nickname;

pub fn greeting(nickname: &Nickname) -> String {
    format!(
        "Hello, {}! I'm here to help you understand your feelings better.",
        nickname
    )
}

pub fn farewell(nickname: &Nickname) -> String {
    format!(
        "Thank you for talking with me today, {}. Remember, it's okay to reach out for help if you need it.",
        nickname
    )
}
