//! Main authentication service implementation

use std::sync::Arc;

use ac_shared::utils::validation::validators;
use chrono::{DateTime, Utc};

use crate::domain::entities::user::User;
use crate::domain::value_objects::{
    AuthResponse, LoginRequest, Principal, RefreshTokenRequest, RegisterRequest,
};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{RefreshTokenRepository, UserRepository, VerificationTokenRepository};
use crate::services::mail::{EmailSender, MailService};
use crate::services::token::TokenService;
use crate::services::verification::VerificationService;

use super::config::AuthServiceConfig;
use super::traits::{CredentialAuthenticator, PasswordHasher};

/// Authentication service orchestrating signup, verification, login,
/// refresh, and principal resolution.
///
/// Stateless with respect to in-process memory: every call reads and
/// writes only through its collaborators, so concurrent callers need no
/// coordination at this layer. Each public operation reads the clock once
/// and threads that instant through every expiry comparison it makes.
pub struct AuthService<U, V, R, H, A, E>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    R: RefreshTokenRepository,
    H: PasswordHasher,
    A: CredentialAuthenticator,
    E: EmailSender,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Verification token issue/consume logic
    verification_service: Arc<VerificationService<V>>,
    /// Access token codec plus refresh token manager
    token_service: Arc<TokenService<R>>,
    /// Credential hashing collaborator
    password_hasher: Arc<H>,
    /// Credential matching collaborator
    authenticator: Arc<A>,
    /// Notification mail dispatch
    mail_service: Arc<MailService<E>>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, V, R, H, A, E> AuthService<U, V, R, H, A, E>
where
    U: UserRepository,
    V: VerificationTokenRepository,
    R: RefreshTokenRepository,
    H: PasswordHasher,
    A: CredentialAuthenticator,
    E: EmailSender,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        verification_service: Arc<VerificationService<V>>,
        token_service: Arc<TokenService<R>>,
        password_hasher: Arc<H>,
        authenticator: Arc<A>,
        mail_service: Arc<MailService<E>>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            verification_service,
            token_service,
            password_hasher,
            authenticator,
            mail_service,
            config,
        }
    }

    /// Registers a new, not-yet-verified user.
    ///
    /// Persists the user and a verification token, then queues the
    /// activation email off the critical path: the registration is
    /// durable whether or not delivery succeeds, and the response does
    /// not wait for delivery confirmation.
    ///
    /// # Errors
    /// * `DomainError::Validation` - Malformed username/email or password
    ///   outside the configured length bounds
    /// * `AuthError::UserAlreadyExists` - Username or email already taken
    pub async fn signup(&self, request: RegisterRequest) -> DomainResult<()> {
        self.signup_at(request, Utc::now()).await
    }

    /// Registration with an explicit clock, for deterministic tests
    pub async fn signup_at(&self, request: RegisterRequest, now: DateTime<Utc>) -> DomainResult<()> {
        self.validate_registration(&request)?;

        let user = User::new(
            request.username,
            request.email,
            self.password_hasher.hash(&request.password),
            now,
        );
        let user = self.user_repository.create(user).await?;

        let token = self.verification_service.issue(&user, now).await?;
        self.mail_service.send_activation_email(&user.email, &token);

        tracing::info!(username = %user.username, "user registered, activation email queued");
        Ok(())
    }

    /// Activates the account a verification token belongs to.
    ///
    /// The token is spent by this call; re-presenting the same literal
    /// afterwards fails with `TokenNotFound`.
    ///
    /// # Errors
    /// * `TokenError::TokenNotFound` - Unknown or already consumed token
    /// * `AuthError::UserNotFound` - Token's owner is missing from the
    ///   user store; a referential-integrity fault, not a user error
    pub async fn verify_account(&self, token: &str) -> DomainResult<()> {
        let verification_token = self.verification_service.consume(token).await?;

        let mut user = self
            .user_repository
            .find_by_username(&verification_token.username)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        user.enable();
        self.user_repository.update(user).await?;

        tracing::info!(username = %verification_token.username, "account verified");
        Ok(())
    }

    /// Authenticates credentials and issues an access/refresh token pair.
    ///
    /// # Errors
    /// * `AuthError::InvalidCredentials` - Credential check failed; the
    ///   error is uniform whether the username or the password was wrong
    pub async fn login(&self, request: LoginRequest) -> DomainResult<AuthResponse> {
        self.login_at(request, Utc::now()).await
    }

    /// Login with an explicit clock, for deterministic tests
    pub async fn login_at(
        &self,
        request: LoginRequest,
        now: DateTime<Utc>,
    ) -> DomainResult<AuthResponse> {
        let principal = self
            .authenticator
            .authenticate(&request.username, &request.password)
            .await
            .map_err(|_| {
                tracing::warn!(username = %request.username, "login rejected");
                DomainError::Auth(AuthError::InvalidCredentials)
            })?;

        let access_token = self.token_service.issue_access_token(&principal.username, now)?;
        let refresh_token = self
            .token_service
            .generate_refresh_token(&principal.username, now)
            .await?;

        tracing::info!(username = %principal.username, "login succeeded");
        Ok(AuthResponse::new(
            access_token,
            refresh_token,
            now + self.token_service.access_token_expiry(),
            principal.username,
        ))
    }

    /// Exchanges a valid refresh token for a new access token.
    ///
    /// The refresh token is not rotated: the response carries the same
    /// string, which stays valid until its own expiry.
    ///
    /// # Errors
    /// * `TokenError::TokenNotFound` / `TokenError::TokenExpired` /
    ///   `TokenError::InvalidRefreshToken` - As signalled by validation
    pub async fn refresh_token(&self, request: RefreshTokenRequest) -> DomainResult<AuthResponse> {
        self.refresh_token_at(request, Utc::now()).await
    }

    /// Refresh with an explicit clock, for deterministic tests
    pub async fn refresh_token_at(
        &self,
        request: RefreshTokenRequest,
        now: DateTime<Utc>,
    ) -> DomainResult<AuthResponse> {
        self.token_service
            .validate_refresh_token(&request.refresh_token, &request.username, now)
            .await?;

        let access_token = self.token_service.issue_access_token(&request.username, now)?;

        Ok(AuthResponse::new(
            access_token,
            request.refresh_token,
            now + self.token_service.access_token_expiry(),
            request.username,
        ))
    }

    /// Resolves the user record behind an authenticated principal.
    ///
    /// The principal comes from the transport layer, never from ambient
    /// state. A missing record is a data-integrity fault: the identity
    /// was already authenticated against the same system.
    pub async fn current_user(&self, principal: &Principal) -> DomainResult<User> {
        self.user_repository
            .find_by_username(&principal.username)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))
    }

    fn validate_registration(&self, request: &RegisterRequest) -> DomainResult<()> {
        if !validators::is_valid_username(&request.username) {
            return Err(DomainError::Validation {
                message: "invalid username".to_string(),
            });
        }
        if !validators::is_valid_email(&request.email) {
            return Err(DomainError::Validation {
                message: "invalid email address".to_string(),
            });
        }
        if !validators::length_between(
            &request.password,
            self.config.min_password_length,
            self.config.max_password_length,
        ) {
            return Err(DomainError::Validation {
                message: "password length out of bounds".to_string(),
            });
        }
        Ok(())
    }
}
