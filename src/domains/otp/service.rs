use async_trait::async_trait;
use std::{error::Error, sync::Arc, time::Duration};

use super::model::{build_otp_mail, Otp, SendOtpRequest};
use crate::email::{AttachmentSpec, MailTransport, SendReceipt, TransportError};

#[derive(Debug)]
pub enum OtpServiceError {
  InvalidInput(String),
  Transport(String),
  Timeout(Duration),
}

impl Error for OtpServiceError {}

impl std::fmt::Display for OtpServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      OtpServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
      OtpServiceError::Transport(msg) => write!(f, "Transport Error: {}", msg),
      OtpServiceError::Timeout(after) => write!(f, "Send timed out after {:?}", after),
    }
  }
}

impl From<TransportError> for OtpServiceError {
  fn from(err: TransportError) -> Self {
    match err {
      TransportError::InvalidRecipient(_) => OtpServiceError::InvalidInput(err.to_string()),
      _ => OtpServiceError::Transport(err.to_string()),
    }
  }
}

#[async_trait]
pub trait OtpService: Send + Sync {
  async fn send_otp(&self, req: SendOtpRequest) -> Result<SendReceipt, OtpServiceError>;
}

pub struct OtpServiceImpl {
  transport: Arc<dyn MailTransport>,
  attachment: AttachmentSpec,
  send_timeout: Duration,
}

impl OtpServiceImpl {
  pub fn new(transport: Arc<dyn MailTransport>, attachment: AttachmentSpec, send_timeout: Duration) -> Self {
    Self {
      transport,
      attachment,
      send_timeout,
    }
  }
}

#[async_trait]
impl OtpService for OtpServiceImpl {
  async fn send_otp(&self, req: SendOtpRequest) -> Result<SendReceipt, OtpServiceError> {
    let email = match req.email.as_deref().map(str::trim) {
      Some(email) if !email.is_empty() => email.to_string(),
      _ => {
        tracing::warn!("Rejected OTP request without an email address");
        return Err(OtpServiceError::InvalidInput("email is required".to_string()));
      }
    };

    let otp = Otp::generate();
    let mail = build_otp_mail(&email, &otp, &self.attachment);

    // Dropping the send future on expiry abandons the SMTP exchange.
    let result = match tokio::time::timeout(self.send_timeout, self.transport.send(&mail)).await {
      Ok(result) => result,
      Err(_) => {
        tracing::warn!("Sending OTP mail to {} timed out after {:?}", email, self.send_timeout);
        return Err(OtpServiceError::Timeout(self.send_timeout));
      }
    };

    match result {
      Ok(receipt) => {
        tracing::info!("OTP mail sent to {}: {:?}", email, receipt);
        Ok(receipt)
      }
      Err(e) => {
        tracing::error!("Failed to send OTP mail to {}: {}", email, e);
        Err(e.into())
      }
    }
  }
}
