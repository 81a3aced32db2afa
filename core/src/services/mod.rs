//! Business services containing domain logic and use cases.

pub mod auth;
pub mod mail;
pub mod token;
pub mod verification;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, CredentialAuthenticator, PasswordHasher};
pub use mail::{EmailSender, MailService, NotificationEmail};
pub use token::{JwtCodec, TokenService, TokenServiceConfig};
pub use verification::VerificationService;
