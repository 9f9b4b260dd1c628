use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};

use crate::domains::otp::service::OtpServiceError;

pub const ERROR_BODY: &str = "Error";

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn bad_gateway(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_GATEWAY, message)
  }

  pub fn gateway_timeout(message: impl Into<String>) -> Self {
    Self::new(StatusCode::GATEWAY_TIMEOUT, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    (self.status_code, self.message).into_response()
  }
}

// Callers only ever see the literal error body; the status code carries the cause.
impl From<OtpServiceError> for AppError {
  fn from(error: OtpServiceError) -> Self {
    match error {
      OtpServiceError::InvalidInput(_) => AppError::bad_request(ERROR_BODY),
      OtpServiceError::Transport(_) => AppError::bad_gateway(ERROR_BODY),
      OtpServiceError::Timeout(_) => AppError::gateway_timeout(ERROR_BODY),
    }
  }
}
