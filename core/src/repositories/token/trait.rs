//! Refresh token repository trait defining the interface for token persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken entity persistence operations
///
/// # Security Considerations
/// - Only token hashes are stored; the plaintext never reaches the repository
/// - Expired tokens should be periodically cleaned up; there is no active
///   revocation in this design
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Save a new refresh token to the repository
    ///
    /// # Returns
    /// * `Ok(RefreshToken)` - The saved token
    /// * `Err(DomainError)` - Save failed
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    ///
    /// # Returns
    /// * `Ok(Some(RefreshToken))` - Token found
    /// * `Ok(None)` - No token with that hash
    /// * `Err(DomainError)` - Storage error
    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, DomainError>;

    /// Delete refresh tokens that expired at or before `now`
    ///
    /// Housekeeping for passive expiry; called periodically by the
    /// surrounding system.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired tokens deleted
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<usize, DomainError>;
}
