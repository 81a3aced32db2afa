//! Authentication and token lifetime configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in milliseconds
    pub access_token_expiry_millis: i64,

    /// Refresh token expiry time in milliseconds
    pub refresh_token_expiry_millis: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expiry_millis: 900_000,              // 15 minutes
            refresh_token_expiry_millis: 7 * 24 * 3_600_000,  // 7 days
            issuer: String::from("accounts"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_millis = minutes * 60_000;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry_millis = days * 86_400_000;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lifetimes() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_millis, 15 * 60 * 1000);
        assert_eq!(config.refresh_token_expiry_millis, 7 * 24 * 60 * 60 * 1000);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_builder_expiry() {
        let config = JwtConfig::new("test-secret")
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);
        assert_eq!(config.access_token_expiry_millis, 1_800_000);
        assert_eq!(config.refresh_token_expiry_millis, 14 * 86_400_000);
        assert!(!config.is_using_default_secret());
    }
}
