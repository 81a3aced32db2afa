//! Outbound notification mail configuration

use serde::{Deserialize, Serialize};

/// Configuration for outbound notification mail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Sender address placed on outgoing notifications
    pub from: String,

    /// Base URL embedded in account verification links
    pub verification_base_url: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from: String::from("accounts@email.com"),
            verification_base_url: String::from("http://localhost:8081/api/auth"),
        }
    }
}

impl MailConfig {
    /// Build the account verification link for a token
    ///
    /// The token is an opaque, URL-safe path segment:
    /// `<base-url>/accountVerification/<token>`
    pub fn verification_link(&self, token: &str) -> String {
        format!(
            "{}/accountVerification/{}",
            self.verification_base_url.trim_end_matches('/'),
            token
        )
    }
}
