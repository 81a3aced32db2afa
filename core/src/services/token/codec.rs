//! Stateless JWT codec for access tokens

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

/// Codec that mints and verifies signed access tokens.
///
/// A pure function of the signing key, the claims, and the caller-supplied
/// clock: every expiry comparison uses the `now` passed in, so one clock
/// read covers an entire operation. No implicit skew tolerance.
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    access_token_expiry_millis: i64,
}

impl JwtCodec {
    /// Creates a new codec with an HS256 symmetric key
    pub fn new(secret: &str, issuer: &str, access_token_expiry_millis: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        // Claims timestamps are epoch milliseconds; the expiry check runs
        // against the caller's clock in `verify`, not here.
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            issuer: issuer.to_string(),
            access_token_expiry_millis,
        }
    }

    /// Mints a signed access token for `subject`, issued at `now`.
    ///
    /// Fails only on signing-key misconfiguration; callers treat that as a
    /// fatal fault, not a user-facing condition.
    pub fn mint(&self, subject: &str, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = Claims::new_access_token(
            subject,
            &self.issuer,
            now,
            self.access_token_expiry_millis,
        );
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token at `now` and returns its subject.
    ///
    /// # Returns
    /// * `Ok(String)` - The subject embedded in the token
    /// * `Err(TokenError::InvalidTokenFormat)` - Bad signature, malformed
    ///   structure, or wrong issuer
    /// * `Err(TokenError::TokenExpired)` - Strictly past `iat + expiry`
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<String, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;

        if token_data.claims.is_expired(now) {
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        Ok(token_data.claims.sub)
    }

    /// Access token lifetime in milliseconds
    pub fn access_token_expiry_millis(&self) -> i64 {
        self.access_token_expiry_millis
    }
}
