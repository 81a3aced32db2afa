pub mod token;
pub mod user;
pub mod verification;

pub use token::{MockRefreshTokenRepository, RefreshTokenRepository};
pub use user::{MockUserRepository, UserRepository};
pub use verification::{MockVerificationTokenRepository, VerificationTokenRepository};
