//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing and token lifetime configuration
//! - `mail` - Outbound notification mail configuration

pub mod auth;
pub mod mail;

// Re-export commonly used types
pub use auth::JwtConfig;
pub use mail::MailConfig;
