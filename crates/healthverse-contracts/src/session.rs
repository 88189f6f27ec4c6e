//! Session identity types.
//!
//! A `Session` is the record of who is logged in and as what. It is owned by
//! the session store; everything else sees clones.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Opaque identifier assigned when a session is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

/// The currently authenticated user.
///
/// Serialized as `{"id", "name", "email", "role"}`; `userId` is accepted as an
/// alias for `id` when reading. A missing `role` reads as `Unset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(alias = "userId")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl Session {
    /// Start an unrouted session with a freshly generated identifier.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            role: Role::Unset,
        }
    }

    pub fn is_routed(&self) -> bool {
        self.role.is_set()
    }
}

/// Derive a display name from an email address: the part before `@`.
///
/// An address without `@` is returned whole.
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
