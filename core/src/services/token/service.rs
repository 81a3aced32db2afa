//! Token service: access token codec plus refresh token manager

use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::token::RefreshToken;
use crate::errors::{DomainError, TokenError};
use crate::repositories::RefreshTokenRepository;

use super::codec::JwtCodec;
use super::config::TokenServiceConfig;

/// Length of the opaque refresh token string handed to clients
const REFRESH_TOKEN_LENGTH: usize = 32;

/// Service managing signed access tokens and opaque refresh tokens
pub struct TokenService<R: RefreshTokenRepository> {
    repository: R,
    codec: JwtCodec,
    refresh_token_expiry_millis: i64,
}

impl<R: RefreshTokenRepository> TokenService<R> {
    /// Creates a new token service instance
    pub fn new(repository: R, config: TokenServiceConfig) -> Self {
        let codec = JwtCodec::new(
            &config.jwt_secret,
            &config.issuer,
            config.access_token_expiry_millis,
        );
        Self {
            repository,
            codec,
            refresh_token_expiry_millis: config.refresh_token_expiry_millis,
        }
    }

    /// Mints a signed access token for `subject`, issued at `now`
    pub fn issue_access_token(
        &self,
        subject: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        self.codec.mint(subject, now)
    }

    /// Verifies an access token at `now` and returns its subject
    pub fn verify_access_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        self.codec.verify(token, now)
    }

    /// Access token lifetime, for response composition
    pub fn access_token_expiry(&self) -> Duration {
        Duration::milliseconds(self.codec.access_token_expiry_millis())
    }

    /// Generates an opaque refresh token for `username` and stores its hash.
    ///
    /// One new token per login; earlier tokens for the same user stay
    /// valid until their own expiry.
    ///
    /// # Returns
    /// * `Ok(String)` - The plaintext token, handed to the client exactly once
    pub async fn generate_refresh_token(
        &self,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, DomainError> {
        let token_string: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LENGTH)
            .map(char::from)
            .collect();

        let refresh_token = RefreshToken::new(
            username.to_string(),
            Self::hash_token(&token_string),
            now,
            self.refresh_token_expiry_millis,
        );

        self.repository
            .save(refresh_token)
            .await
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(token_string)
    }

    /// Validates a presented refresh token at `now`.
    ///
    /// The two failure kinds stay distinct for observability even though
    /// both surface to the end user as "please log in again".
    ///
    /// # Returns
    /// * `Ok(())` - Token is in the store, unexpired, and owned by `username`
    /// * `Err(TokenError::TokenNotFound)` - Unknown token string
    /// * `Err(TokenError::TokenExpired)` - Found, but `now >= expires_at`
    /// * `Err(TokenError::InvalidRefreshToken)` - Owned by a different user
    pub async fn validate_refresh_token(
        &self,
        token: &str,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let refresh_token = self
            .repository
            .find_by_token_hash(&Self::hash_token(token))
            .await?
            .ok_or(DomainError::Token(TokenError::TokenNotFound))?;

        if refresh_token.is_expired(now) {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        if refresh_token.username != username {
            tracing::warn!(
                requested = username,
                owner = refresh_token.username,
                "refresh token presented for a user it was not issued to"
            );
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        Ok(())
    }

    /// Removes refresh tokens expired at or before `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of tokens cleaned up
    pub async fn cleanup_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError> {
        self.repository.delete_expired(now).await
    }

    /// Hashes a token for secure storage
    fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
