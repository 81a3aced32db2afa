//! Verification token repository trait for one-time activation tokens.

use async_trait::async_trait;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

/// Repository trait for VerificationToken persistence operations
///
/// Consumption goes through `take_by_token`, which removes the token from
/// the active set in the same storage operation that reads it. Two
/// concurrent consumers of the same literal can therefore never both
/// succeed.
#[async_trait]
pub trait VerificationTokenRepository: Send + Sync {
    /// Save a newly issued verification token
    async fn save(&self, token: VerificationToken) -> Result<VerificationToken, DomainError>;

    /// Find a verification token without consuming it
    ///
    /// # Returns
    /// * `Ok(Some(VerificationToken))` - Token is in the active set
    /// * `Ok(None)` - Unknown or already consumed
    async fn find_by_token(&self, token: &str)
        -> Result<Option<VerificationToken>, DomainError>;

    /// Atomically remove and return a verification token
    ///
    /// This is the consume primitive: find-and-delete in a single storage
    /// operation (compare-and-delete or transactional read-then-delete).
    ///
    /// # Returns
    /// * `Ok(Some(VerificationToken))` - Token existed and is now spent
    /// * `Ok(None)` - Unknown or already consumed
    async fn take_by_token(&self, token: &str)
        -> Result<Option<VerificationToken>, DomainError>;
}
