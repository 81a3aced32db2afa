//! Collaborator traits consumed by the authentication service

use async_trait::async_trait;

use crate::domain::value_objects::Principal;
use crate::errors::DomainError;

/// Collaborator computing credential hashes.
///
/// The hash is opaque to this core; algorithm choice lives with the
/// implementation.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> String;
}

/// Collaborator performing the credential-matching step.
///
/// The core consumes "authentication succeeded for user U" as an input;
/// the matching algorithm itself is out of scope.
#[async_trait]
pub trait CredentialAuthenticator: Send + Sync {
    /// Authenticate a username/password pair
    ///
    /// # Returns
    /// * `Ok(Principal)` - The authenticated identity
    /// * `Err(DomainError)` - Credentials rejected; the auth service maps
    ///   every rejection to a uniform bad-credentials error
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, DomainError>;
}
