//! User and session records.
//!
//! # Responsibility
//! - Define the stored user shape and its password-stripped session view.
//!
//! # Invariants
//! - `email` is unique among registered users; uniqueness is checked at
//!   registration time only, never at the storage layer.
//! - `Session` never carries the password field in memory or on the wire.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a registered user.
pub type UserId = Uuid;

/// Registered account as persisted under the `users` key.
///
/// The password is stored and compared in plaintext. Hardening this is
/// an explicit non-goal: changing it would break previously stored
/// credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Creates a new user with a generated stable ID.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the password-stripped view of this account.
    pub fn to_session(&self) -> Session {
        Session {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Returns the directory entry for this account.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Currently authenticated identity as persisted under `currentUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Password-stripped account view exposed to consumers (assignee
/// pickers, task cards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
