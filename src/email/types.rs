use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: "".to_string(),
    }
  }
}

/// A file read from disk and attached to every outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentSpec {
  pub filename: String,
  pub path: String,
  pub content_type: String,
}

impl Default for AttachmentSpec {
  fn default() -> Self {
    AttachmentSpec {
      filename: "thankyou.jpeg".to_string(),
      path: "./thankyou.jpeg".to_string(),
      content_type: "image/jpeg".to_string(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailRequest {
  pub to: String,
  pub subject: String,
  pub html_body: String,
  pub text_body: String,
  pub attachment: AttachmentSpec,
}

/// What the relay answered after accepting a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendReceipt {
  pub code: String,
  pub message: Vec<String>,
}

#[derive(Debug)]
pub enum TransportError {
  InvalidRecipient(String),
  InvalidSender(String),
  Attachment(String),
  Message(String),
  Smtp(String),
}

impl std::error::Error for TransportError {}

impl std::fmt::Display for TransportError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TransportError::InvalidRecipient(msg) => write!(f, "Invalid recipient: {}", msg),
      TransportError::InvalidSender(msg) => write!(f, "Invalid sender: {}", msg),
      TransportError::Attachment(msg) => write!(f, "Attachment error: {}", msg),
      TransportError::Message(msg) => write!(f, "Message build error: {}", msg),
      TransportError::Smtp(msg) => write!(f, "SMTP error: {}", msg),
    }
  }
}
