//! Verification token entity for email-based account activation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One-time token proving control of the registered email address.
///
/// The token value is a v4 UUID, 122 bits of entropy: unguessable by
/// construction, no collision check needed. Consumption is deletion from
/// the store, so a consumed token simply no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationToken {
    /// Opaque, URL-safe token string
    pub token: String,

    /// Username of the account this token verifies
    pub username: String,

    /// Timestamp when the token was issued
    pub created_at: DateTime<Utc>,
}

impl VerificationToken {
    /// Creates a new verification token for `username`.
    pub fn new(username: String, now: DateTime<Utc>) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            username,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_binds_owner() {
        let token = VerificationToken::new("alice".to_string(), Utc::now());
        assert_eq!(token.username, "alice");
        assert!(!token.token.is_empty());
    }

    #[test]
    fn test_token_values_are_unique() {
        let now = Utc::now();
        let a = VerificationToken::new("alice".to_string(), now);
        let b = VerificationToken::new("alice".to_string(), now);
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_token_is_url_safe() {
        let token = VerificationToken::new("alice".to_string(), Utc::now());
        assert!(token
            .token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'));
    }
}
