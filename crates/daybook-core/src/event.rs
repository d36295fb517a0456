//! Activity events

use serde::{Deserialize, Serialize};

/// An immutable record of something a user did
///
/// Stamped with the directory clock at creation and never mutated after.
/// An event lives in its owner's permanent log until the owner is deleted;
/// it additionally appears in the rolling activity window until it ages out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Name of the owning user
    pub user: String,
    /// Event type label, e.g. "LOGIN"
    #[serde(rename = "type")]
    pub kind: String,
    /// Creation time in milliseconds since the Unix epoch
    pub created: i64,
}

/// An event as submitted by a caller, before the store stamps it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventInput {
    /// Event type label
    #[serde(rename = "type")]
    pub kind: String,
}

impl EventInput {
    /// Create an input with the given type label
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// Stamp the input with an owner and a creation time
    pub fn into_event(self, user: impl Into<String>, created: i64) -> Event {
        Event {
            user: user.into(),
            kind: self.kind,
            created,
        }
    }
}
