//! Unit tests for the token service

use chrono::{Duration, Utc};

use crate::errors::{DomainError, TokenError};
use crate::repositories::{MockRefreshTokenRepository, RefreshTokenRepository};
use crate::services::token::{TokenService, TokenServiceConfig};

const REFRESH_EXPIRY_MS: i64 = 7 * 24 * 3_600_000;

fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        issuer: "accounts".to_string(),
        access_token_expiry_millis: 900_000,
        refresh_token_expiry_millis: REFRESH_EXPIRY_MS,
    }
}

fn create_test_service() -> (TokenService<MockRefreshTokenRepository>, MockRefreshTokenRepository)
{
    let repository = MockRefreshTokenRepository::new();
    let service = TokenService::new(repository.clone(), test_config());
    (service, repository)
}

#[tokio::test]
async fn test_generate_refresh_token_stores_hash_only() {
    let (service, repository) = create_test_service();
    let now = Utc::now();

    let token = service.generate_refresh_token("alice", now).await.unwrap();

    assert_eq!(token.len(), 32);
    assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(repository.len().await, 1);
    // The plaintext is not the storage key
    assert!(repository.find_by_token_hash(&token).await.unwrap().is_none());
}

#[tokio::test]
async fn test_generated_tokens_are_unique() {
    let (service, _) = create_test_service();
    let now = Utc::now();

    let a = service.generate_refresh_token("alice", now).await.unwrap();
    let b = service.generate_refresh_token("alice", now).await.unwrap();

    assert_ne!(a, b);
}

#[tokio::test]
async fn test_validate_refresh_token_success() {
    let (service, _) = create_test_service();
    let now = Utc::now();

    let token = service.generate_refresh_token("alice", now).await.unwrap();

    // Valid at issue time and just before expiry
    service.validate_refresh_token(&token, "alice", now).await.unwrap();
    let just_before = now + Duration::milliseconds(REFRESH_EXPIRY_MS - 1);
    service
        .validate_refresh_token(&token, "alice", just_before)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_validate_unknown_token_is_not_found() {
    let (service, _) = create_test_service();

    let result = service
        .validate_refresh_token("no-such-token", "alice", Utc::now())
        .await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenNotFound)
    ));
}

#[tokio::test]
async fn test_validate_expired_token_boundary_is_inclusive() {
    let (service, _) = create_test_service();
    let now = Utc::now();

    let token = service.generate_refresh_token("alice", now).await.unwrap();

    // Expired exactly at expires_at, and stays expired after
    let at_expiry = now + Duration::milliseconds(REFRESH_EXPIRY_MS);
    let result = service.validate_refresh_token(&token, "alice", at_expiry).await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenExpired)
    ));

    let result = service
        .validate_refresh_token(&token, "alice", at_expiry + Duration::days(1))
        .await;
    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::TokenExpired)
    ));
}

#[tokio::test]
async fn test_validate_rejects_foreign_username() {
    let (service, _) = create_test_service();
    let now = Utc::now();

    let token = service.generate_refresh_token("alice", now).await.unwrap();
    let result = service.validate_refresh_token(&token, "mallory", now).await;

    assert!(matches!(
        result.unwrap_err(),
        DomainError::Token(TokenError::InvalidRefreshToken)
    ));
}

#[tokio::test]
async fn test_validated_token_is_not_rotated() {
    let (service, repository) = create_test_service();
    let now = Utc::now();

    let token = service.generate_refresh_token("alice", now).await.unwrap();
    service.validate_refresh_token(&token, "alice", now).await.unwrap();

    // Still present and still valid after validation
    assert_eq!(repository.len().await, 1);
    service
        .validate_refresh_token(&token, "alice", now + Duration::hours(1))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cleanup_expired_tokens() {
    let (service, repository) = create_test_service();
    let now = Utc::now();

    service.generate_refresh_token("alice", now).await.unwrap();
    service.generate_refresh_token("bob", now).await.unwrap();

    let deleted = service
        .cleanup_expired(now + Duration::milliseconds(REFRESH_EXPIRY_MS))
        .await
        .unwrap();

    assert_eq!(deleted, 2);
    assert_eq!(repository.len().await, 0);
}

#[tokio::test]
async fn test_access_token_roundtrip_through_service() {
    let (service, _) = create_test_service();
    let now = Utc::now();

    let access = service.issue_access_token("alice", now).unwrap();
    let subject = service.verify_access_token(&access, now).unwrap();

    assert_eq!(subject, "alice");
    assert_eq!(service.access_token_expiry(), Duration::milliseconds(900_000));
}
