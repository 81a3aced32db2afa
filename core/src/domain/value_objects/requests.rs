//! Request value objects accepted by the auth orchestrator.

use serde::{Deserialize, Serialize};

/// Registration request submitted at signup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username
    pub username: String,
    /// Email address to verify
    pub email: String,
    /// Plaintext password; hashed by a collaborator before persistence
    pub password: String,
}

/// Login request carrying credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Refresh request exchanging a refresh token for a new access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    /// The opaque refresh token string issued at login
    pub refresh_token: String,
    /// Username the new access token should be minted for
    pub username: String,
}
