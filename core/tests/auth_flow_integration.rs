//! End-to-end account lifecycle through the public crate API:
//! signup, activation, login, refresh, principal resolution.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ac_core::domain::value_objects::{LoginRequest, Principal, RefreshTokenRequest, RegisterRequest};
use ac_core::errors::{AuthError, DomainError};
use ac_core::repositories::{
    MockRefreshTokenRepository, MockUserRepository, MockVerificationTokenRepository, UserRepository,
};
use ac_core::services::auth::{
    AuthService, AuthServiceConfig, CredentialAuthenticator, PasswordHasher,
};
use ac_core::services::mail::{EmailSender, MailService, NotificationEmail};
use ac_core::services::token::{TokenService, TokenServiceConfig};
use ac_core::services::verification::VerificationService;
use ac_shared::config::MailConfig;
use async_trait::async_trait;

struct PrefixHasher;

impl PasswordHasher for PrefixHasher {
    fn hash(&self, plaintext: &str) -> String {
        format!("hashed:{plaintext}")
    }
}

/// Authenticator backed by the user store: matches the stored hash and
/// refuses accounts that have not been activated yet.
struct StoreAuthenticator {
    users: MockUserRepository,
}

#[async_trait]
impl CredentialAuthenticator for StoreAuthenticator {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, DomainError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(DomainError::Auth(AuthError::InvalidCredentials))?;

        if !user.is_enabled() || user.password_hash != format!("hashed:{password}") {
            return Err(DomainError::Auth(AuthError::InvalidCredentials));
        }
        Ok(Principal::new(username))
    }
}

/// Email transport capturing bodies so the test can lift the
/// verification token out of the activation link.
#[derive(Clone)]
struct CapturingSender {
    bodies: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl EmailSender for CapturingSender {
    async fn send(&self, email: &NotificationEmail) -> Result<(), DomainError> {
        self.bodies.lock().unwrap().push(email.body.clone());
        Ok(())
    }
}

#[tokio::test]
async fn account_lifecycle_from_signup_to_refresh() {
    let users = MockUserRepository::new();
    let bodies = Arc::new(Mutex::new(Vec::new()));

    let verification_service = Arc::new(VerificationService::new(Arc::new(
        MockVerificationTokenRepository::new(),
    )));
    let token_service = Arc::new(TokenService::new(
        MockRefreshTokenRepository::new(),
        TokenServiceConfig::default(),
    ));
    let mail_service = Arc::new(MailService::new(
        Arc::new(CapturingSender {
            bodies: Arc::clone(&bodies),
        }),
        MailConfig::default(),
    ));

    let auth = AuthService::new(
        Arc::new(users.clone()),
        verification_service,
        Arc::clone(&token_service),
        Arc::new(PrefixHasher),
        Arc::new(StoreAuthenticator {
            users: users.clone(),
        }),
        mail_service,
        AuthServiceConfig::default(),
    );

    auth.signup(RegisterRequest {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "Secret123!".to_string(),
    })
    .await
    .expect("signup should succeed");

    // Delivery is a spawned task
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Login is refused until the account is activated
    let early = auth
        .login(LoginRequest {
            username: "alice".to_string(),
            password: "Secret123!".to_string(),
        })
        .await;
    assert!(matches!(
        early,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));

    let body = bodies.lock().unwrap().last().cloned().expect("one email sent");
    let token = body.rsplit('/').next().expect("link carries the token");

    auth.verify_account(token)
        .await
        .expect("verification should succeed");

    let response = auth
        .login(LoginRequest {
            username: "alice".to_string(),
            password: "Secret123!".to_string(),
        })
        .await
        .expect("login should succeed after activation");
    assert_eq!(response.username, "alice");
    assert_eq!(
        token_service
            .verify_access_token(&response.access_token, chrono::Utc::now())
            .expect("freshly minted token should verify"),
        "alice"
    );

    let refreshed = auth
        .refresh_token(RefreshTokenRequest {
            refresh_token: response.refresh_token.clone(),
            username: "alice".to_string(),
        })
        .await
        .expect("refresh should succeed");
    assert_eq!(refreshed.refresh_token, response.refresh_token);

    let user = auth
        .current_user(&Principal::new("alice"))
        .await
        .expect("principal should resolve");
    assert!(user.is_enabled());
}
