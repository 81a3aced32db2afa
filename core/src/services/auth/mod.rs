//! Authentication service module
//!
//! This module provides the account authentication flow:
//! - User registration gated by email verification
//! - Account activation through one-time tokens
//! - Credential login issuing access and refresh tokens
//! - Access token renewal via refresh tokens
//! - Current principal resolution

mod config;
mod service;
mod traits;


pub use config::AuthServiceConfig;
pub use service::AuthService;
pub use traits::{CredentialAuthenticator, PasswordHasher};
