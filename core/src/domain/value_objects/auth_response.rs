//! Authentication response value object for API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authentication response returned after a successful login or refresh.
///
/// Output only; it has no identity or lifecycle of its own. `expires_at`
/// refers to the access token and serializes as an ISO 8601 timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed JWT access token for API authentication
    pub access_token: String,

    /// Opaque refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration instant
    pub expires_at: DateTime<Utc>,

    /// Username the tokens were issued for
    pub username: String,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_at: DateTime<Utc>,
        username: String,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at,
            username,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_at_serializes_as_iso8601() {
        let response = AuthResponse::new(
            "jwt".to_string(),
            "refresh".to_string(),
            "2026-01-02T03:04:05Z".parse().unwrap(),
            "alice".to_string(),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["expires_at"], "2026-01-02T03:04:05Z");
        assert_eq!(json["username"], "alice");
    }
}
