//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account.
///
/// A user starts life disabled and becomes enabled through exactly one
/// successful email verification. There is no reverse transition and the
/// core never deletes users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique username chosen at registration
    pub username: String,

    /// Email address the verification link is sent to
    pub email: String,

    /// Hashed credential; opaque to the core, produced by the hasher collaborator
    pub password_hash: String,

    /// Whether the account has completed email verification
    pub enabled: bool,

    /// Timestamp when the user registered
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not-yet-verified user.
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            enabled: false,
            created_at,
        }
    }

    /// Marks the account as verified. The only state transition this core
    /// performs on a user.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Checks whether the account has completed verification
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
