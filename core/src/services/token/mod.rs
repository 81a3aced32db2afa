//! Token service module for access and refresh token management
//!
//! This module handles all token-related operations:
//! - JWT access token minting and verification (stateless codec)
//! - Opaque refresh token generation and validation
//! - Passive cleanup of expired refresh tokens

mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use codec::JwtCodec;
pub use config::TokenServiceConfig;
pub use service::TokenService;
