//! Verification token service module
//!
//! Issues one-time email verification tokens and consumes them exactly
//! once. Consumption deletes the token, so replaying a spent token always
//! fails.

mod service;

#[cfg(test)]
mod tests;

pub use service::VerificationService;
