//! Unit tests for the verification token service

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::MockVerificationTokenRepository;
use crate::services::verification::VerificationService;

fn test_user() -> User {
    User::new(
        "alice".to_string(),
        "alice@x.com".to_string(),
        "hashed_secret".to_string(),
        Utc::now(),
    )
}

fn create_test_service() -> VerificationService<MockVerificationTokenRepository> {
    VerificationService::new(Arc::new(MockVerificationTokenRepository::new()))
}

#[tokio::test]
async fn test_issue_then_consume_yields_owner() {
    let service = create_test_service();
    let user = test_user();

    let token = service.issue(&user, Utc::now()).await.unwrap();
    let consumed = service.consume(&token).await.unwrap();

    assert_eq!(consumed.username, "alice");
    assert_eq!(consumed.token, token);
}

#[tokio::test]
async fn test_consume_is_single_use() {
    let service = create_test_service();
    let user = test_user();

    let token = service.issue(&user, Utc::now()).await.unwrap();
    service.consume(&token).await.unwrap();

    // Re-presenting the same literal must fail: the token no longer exists.
    let result = service.consume(&token).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenNotFound)
    ));
}

#[tokio::test]
async fn test_consume_unknown_token_fails() {
    let service = create_test_service();

    let result = service.consume("never-issued").await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenNotFound)
    ));
}

#[tokio::test]
async fn test_reissue_does_not_invalidate_earlier_token() {
    let service = create_test_service();
    let user = test_user();
    let now = Utc::now();

    let first = service.issue(&user, now).await.unwrap();
    let second = service.issue(&user, now).await.unwrap();

    assert_ne!(first, second);
    // Both remain individually consumable, each exactly once.
    assert!(service.consume(&first).await.is_ok());
    assert!(service.consume(&second).await.is_ok());
    assert!(service.consume(&first).await.is_err());
}
