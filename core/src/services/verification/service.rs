//! Verification token issue/consume logic

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::VerificationTokenRepository;

/// Service managing one-time account verification tokens
pub struct VerificationService<V: VerificationTokenRepository> {
    repository: Arc<V>,
}

impl<V: VerificationTokenRepository> VerificationService<V> {
    /// Create a new verification service
    pub fn new(repository: Arc<V>) -> Self {
        Self { repository }
    }

    /// Issues a fresh verification token bound to `user`.
    ///
    /// The token value is unguessable by construction; no collision check
    /// is performed. Issuing again for the same user leaves earlier
    /// unconsumed tokens valid.
    ///
    /// # Returns
    /// * `Ok(String)` - The literal token to embed in the verification link
    pub async fn issue(&self, user: &User, now: DateTime<Utc>) -> DomainResult<String> {
        let verification_token = VerificationToken::new(user.username.clone(), now);
        let token = verification_token.token.clone();

        self.repository.save(verification_token).await?;

        tracing::debug!(username = %user.username, "issued verification token");
        Ok(token)
    }

    /// Consumes a verification token, spending it permanently.
    ///
    /// # Returns
    /// * `Ok(VerificationToken)` - The spent token, carrying the owning username
    /// * `Err(TokenError::TokenNotFound)` - Unknown or already consumed;
    ///   surfaces to the user as an invalid or expired link
    pub async fn consume(&self, token: &str) -> DomainResult<VerificationToken> {
        self.repository
            .take_by_token(token)
            .await?
            .ok_or(DomainError::Token(TokenError::TokenNotFound))
    }
}
