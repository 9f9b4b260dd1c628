//! Email sending functionality module
//!
//! Outgoing mail goes through the [`MailTransport`] trait. [`EmailService`]
//! is the lettre-backed implementation used in production; tests swap in
//! their own transports.

mod service;
mod types;

use async_trait::async_trait;

pub use service::EmailService;
pub use types::{AttachmentSpec, MailRequest, SendReceipt, SmtpConfig, TransportError};

#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, request: &MailRequest) -> Result<SendReceipt, TransportError>;
}
