//! Management message action types (IEEE 1588 Section 15.4.1.6).

use serde::Serialize;

use crate::error::{MgmtError, Result};

/// Action requested of the management id.
///
/// Discriminants are the `actionField` values of the management message.
/// RESPONSE and ACKNOWLEDGE are only sent by the daemon and have no keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ActionType {
    /// Read the current value.
    Get = 0x00,
    /// Write a new value (carries a payload).
    Set = 0x01,
    /// Trigger an operation on the daemon.
    Command = 0x03,
}

/// Keyword table, one canonical keyword per action.
pub const ACTION_KEYWORDS: [(&str, ActionType); 3] = [
    ("get", ActionType::Get),
    ("set", ActionType::Set),
    ("command", ActionType::Command),
];

impl ActionType {
    /// Resolve an action keyword. Matching is exact and case-sensitive.
    ///
    /// # Errors
    /// Returns [`MgmtError::UnresolvedActionKeyword`] if the keyword is not
    /// in [`ACTION_KEYWORDS`].
    pub fn resolve(keyword: &str) -> Result<Self> {
        ACTION_KEYWORDS
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|(_, action)| *action)
            .ok_or_else(|| MgmtError::UnresolvedActionKeyword {
                keyword: keyword.to_string(),
            })
    }

    /// The canonical keyword for this action.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Command => "command",
        }
    }

    /// The `actionField` value.
    #[must_use]
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Set => write!(f, "SET"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

impl std::str::FromStr for ActionType {
    type Err = MgmtError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}
