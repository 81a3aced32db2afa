//! Fire-and-forget notification mail dispatch

use std::sync::Arc;

use ac_shared::config::MailConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Notification email handed to the transport collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEmail {
    /// Recipient address
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

/// Collaborator trait for outbound email transport
///
/// Implementations live in the infrastructure layer (SMTP, provider API).
/// `send` runs inside a spawned task, so errors are reported there and
/// never to the caller that queued the mail.
#[async_trait]
pub trait EmailSender: Send + Sync + 'static {
    async fn send(&self, email: &NotificationEmail) -> Result<(), DomainError>;
}

/// Service composing and dispatching account notification mail
pub struct MailService<E: EmailSender> {
    sender: Arc<E>,
    config: MailConfig,
}

impl<E: EmailSender> MailService<E> {
    /// Create a new mail service
    pub fn new(sender: Arc<E>, config: MailConfig) -> Self {
        Self { sender, config }
    }

    /// Queues the account activation email for `recipient`.
    ///
    /// Returns as soon as the send task is spawned; the signup that
    /// triggered it does not wait for delivery, and delivery failure is
    /// logged inside the task rather than raised.
    pub fn send_activation_email(&self, recipient: &str, token: &str) {
        let link = self.config.verification_link(token);
        let email = NotificationEmail {
            recipient: recipient.to_string(),
            subject: "Please activate your account".to_string(),
            body: format!(
                "Thank you for signing up, please click on the url to activate your account: {}",
                link
            ),
        };
        self.dispatch(email);
    }

    fn dispatch(&self, email: NotificationEmail) {
        let sender = Arc::clone(&self.sender);
        tokio::spawn(async move {
            match sender.send(&email).await {
                Ok(()) => {
                    tracing::info!(recipient = %email.recipient, "activation email sent");
                }
                Err(error) => {
                    // Logged-and-dropped failure channel; the user record
                    // and verification token are already durable.
                    tracing::error!(
                        recipient = %email.recipient,
                        %error,
                        "failed to send notification email"
                    );
                }
            }
        });
    }
}
