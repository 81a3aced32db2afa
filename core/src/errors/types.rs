//! Error types for authentication and token lifecycle operations
//!
//! This module defines the error taxonomy surfaced by the auth services.
//! Each variant maps to a stable error code in the `ErrorResponse`
//! conversions so the transport layer can handle failures programmatically.

use ac_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The chosen username or email is already taken.
    #[error("User already exists")]
    UserAlreadyExists,

    /// No user record backs an already-resolved identity. This is a
    /// referential-integrity fault between stores, surfaced as a server
    /// fault rather than a user input error.
    #[error("User not found")]
    UserNotFound,

    /// Credential check failed. The message is deliberately uniform: it
    /// must not reveal whether the username or the password was wrong.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Verification or refresh token string is not in the active set.
    #[error("Token not found")]
    TokenNotFound,

    #[error("Token expired")]
    TokenExpired,

    /// Signature mismatch, malformed structure, or wrong issuer.
    #[error("Invalid token format")]
    InvalidTokenFormat,

    /// Refresh token presented for a username it was not issued to.
    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    /// Signing-key misconfiguration. Fatal for the operation, not user-facing.
    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Convert AuthError to ErrorResponse
impl From<AuthError> for ErrorResponse {
    fn from(err: AuthError) -> Self {
        let error_code = match &err {
            AuthError::UserAlreadyExists => "DUPLICATE_USER",
            AuthError::UserNotFound => "USER_NOT_FOUND",
            AuthError::InvalidCredentials => "BAD_CREDENTIALS",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

/// Convert TokenError to ErrorResponse
impl From<TokenError> for ErrorResponse {
    fn from(err: TokenError) -> Self {
        let error_code = match &err {
            TokenError::TokenNotFound => "TOKEN_NOT_FOUND",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::InvalidTokenFormat => "INVALID_TOKEN_FORMAT",
            TokenError::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        };

        ErrorResponse::new(error_code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_error_conversion() {
        let error = TokenError::TokenExpired;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "TOKEN_EXPIRED");
        assert!(response.message.contains("Token expired"));
    }

    #[test]
    fn test_auth_error_conversion() {
        let error = AuthError::UserAlreadyExists;
        let response: ErrorResponse = error.into();
        assert_eq!(response.error, "DUPLICATE_USER");
    }

    #[test]
    fn test_bad_credentials_message_is_uniform() {
        // The same message regardless of which credential component failed.
        let message = AuthError::InvalidCredentials.to_string();
        assert_eq!(message, "Invalid username or password");
        assert!(!message.to_lowercase().contains("not found"));
    }
}
