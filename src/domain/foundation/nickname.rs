//! Nickname value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name the caller wants to be addressed by.
///
/// Nicknames are never validated: any string, including the empty string,
/// is accepted and interpolated verbatim into response templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nickname(String);

impl Nickname {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Nickname {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Nickname {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
