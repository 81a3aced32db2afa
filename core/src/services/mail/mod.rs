//! Notification mail module
//!
//! Builds account notification emails and hands them to the transport
//! collaborator off the caller's critical path. Delivery failure is
//! logged and dropped; it never reaches the operation that queued the
//! mail.

mod service;

pub use service::{EmailSender, MailService, NotificationEmail};
