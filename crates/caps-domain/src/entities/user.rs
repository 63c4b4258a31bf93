//! User entity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a user by the persistence capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier value
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted user as returned to callers
///
/// Serialized in camelCase: `{"userId": 42, "userName": "a"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier assigned on creation
    pub user_id: UserId,
    /// Login name
    pub user_name: String,
}

impl User {
    /// Create a user value
    pub fn new(user_id: UserId, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }
}

/// Registration payload decoded from a request body
///
/// Both fields are required; a body missing either is malformed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    /// Requested login name
    pub username: String,
    /// Plaintext password, hashed before it reaches persistence
    pub password: String,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
