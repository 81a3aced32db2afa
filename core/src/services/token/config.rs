//! Configuration for the token service

use ac_shared::config::JwtConfig;

/// Configuration for the token service
///
/// Lifetimes are explicit millisecond values threaded through the codec
/// and refresh manager; neither keeps a hidden default.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT issuer claim
    pub issuer: String,
    /// Access token expiry in milliseconds
    pub access_token_expiry_millis: i64,
    /// Refresh token expiry in milliseconds
    pub refresh_token_expiry_millis: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(JwtConfig::default())
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret,
            issuer: config.issuer,
            access_token_expiry_millis: config.access_token_expiry_millis,
            refresh_token_expiry_millis: config.refresh_token_expiry_millis,
        }
    }
}
