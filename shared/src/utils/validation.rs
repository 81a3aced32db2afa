//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimal RFC-5322-ish email shape: local part, one `@`, dotted domain.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Usernames: 3-32 chars, alphanumeric plus `_` and `-`, starting with a letter or digit.
static USERNAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_\-]{2,31}$").expect("username pattern is valid")
});

/// Common validation functions
pub mod validators {
    use super::{EMAIL_PATTERN, USERNAME_PATTERN};

    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address is valid
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Check if a username is valid
    pub fn is_valid_username(username: &str) -> bool {
        USERNAME_PATTERN.is_match(username)
    }
}
