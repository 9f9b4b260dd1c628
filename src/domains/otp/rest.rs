use axum::{
  extract::{rejection::JsonRejection, Json, State},
  routing::{post, Router},
};

use super::model::SendOtpRequest;
use crate::{
  error::{AppError, ERROR_BODY},
  state::{AppState, SharedAppState},
};

pub const SENT_BODY: &str = "Mail Sent";

pub fn otp_routes() -> Router<SharedAppState> {
  Router::new().route("/send-otp", post(send_otp_handler))
}

pub async fn send_otp_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<SendOtpRequest>, JsonRejection>,
) -> Result<&'static str, AppError> {
  let Json(payload) = payload.map_err(|rejection| {
    tracing::warn!("Rejected /send-otp body: {}", rejection.body_text());
    AppError::bad_request(ERROR_BODY)
  })?;

  state.send_otp(payload).await?;

  Ok(SENT_BODY)
}
