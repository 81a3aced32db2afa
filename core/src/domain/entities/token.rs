//! Token entities for JWT access tokens and opaque refresh tokens.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims structure for the JWT payload.
///
/// `iat` and `exp` are epoch milliseconds rather than the conventional
/// seconds: token lifetimes are configured in milliseconds and the expiry
/// comparison must honor them exactly. The codec performs the expiry check
/// itself against a caller-supplied clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued-at timestamp, epoch milliseconds
    pub iat: i64,

    /// Expiration timestamp, epoch milliseconds
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims for an access token issued at `now`.
    pub fn new_access_token(
        subject: &str,
        issuer: &str,
        now: DateTime<Utc>,
        expiry_millis: i64,
    ) -> Self {
        let iat = now.timestamp_millis();
        Self {
            sub: subject.to_string(),
            iat,
            exp: iat + expiry_millis,
            iss: issuer.to_string(),
        }
    }

    /// Checks whether the claims have expired at `now`.
    ///
    /// The token stays valid through its exact expiry instant; it is
    /// invalid strictly after it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.exp
    }
}

/// Refresh token entity stored through the repository collaborator.
///
/// Only a SHA-256 hash of the opaque value is kept at rest; the plaintext
/// is handed to the client once and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token
    pub id: Uuid,

    /// Username this token was issued to
    pub username: String,

    /// Hashed token value for security
    pub token_hash: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Creates a new refresh token valid for `lifetime_millis` from `now`.
    pub fn new(
        username: String,
        token_hash: String,
        now: DateTime<Utc>,
        lifetime_millis: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            token_hash,
            created_at: now,
            expires_at: now + Duration::milliseconds(lifetime_millis),
        }
    }

    /// Checks whether the token has expired at `now`.
    ///
    /// The boundary is inclusive on the expiry side: a token is expired
    /// for any `now >= expires_at`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
