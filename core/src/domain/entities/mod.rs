//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification_token;

// Re-export commonly used types
pub use token::{Claims, RefreshToken};
pub use user::User;
pub use verification_token::VerificationToken;
