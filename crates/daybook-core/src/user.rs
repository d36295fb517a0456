//! User records

use serde::{Deserialize, Serialize};

/// A registered user
///
/// The name is the unique key of the directory; the email is unique across
/// all users. The password is an opaque string — hashing, if any, happens
/// before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username
    pub name: String,
    /// Contact address, unique across the directory
    pub email: String,
    /// Opaque credential string
    pub password: String,
    /// Optional phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A user minus the name: the payload of an update
///
/// Updates replace everything but the key, so the wire shape omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Contact address
    pub email: String,
    /// Opaque credential string
    pub password: String,
    /// Optional phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UserProfile {
    /// Attach a name, producing a full user record
    pub fn into_user(self, name: impl Into<String>) -> User {
        User {
            name: name.into(),
            email: self.email,
            password: self.password,
            phone: self.phone,
        }
    }
}
