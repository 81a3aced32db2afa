//! Mock implementation of VerificationTokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::verification_token::VerificationToken;
use crate::errors::DomainError;

use super::trait_::VerificationTokenRepository;

/// Mock verification token repository for testing
#[derive(Clone)]
pub struct MockVerificationTokenRepository {
    tokens: Arc<RwLock<HashMap<String, VerificationToken>>>,
}

impl MockVerificationTokenRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockVerificationTokenRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationTokenRepository for MockVerificationTokenRepository {
    async fn save(&self, token: VerificationToken) -> Result<VerificationToken, DomainError> {
        let mut tokens = self.tokens.write().await;
        tokens.insert(token.token.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token).cloned())
    }

    async fn take_by_token(
        &self,
        token: &str,
    ) -> Result<Option<VerificationToken>, DomainError> {
        // Single map operation under the write lock: at most one caller
        // can ever receive a given token.
        let mut tokens = self.tokens.write().await;
        Ok(tokens.remove(token))
    }
}
