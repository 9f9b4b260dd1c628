use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::otp::{
    model::SendOtpRequest,
    service::{OtpService, OtpServiceError, OtpServiceImpl},
  },
  email::{MailTransport, SendReceipt},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_otp(
    &self,
    req: SendOtpRequest,
  ) -> impl std::future::Future<Output = Result<SendReceipt, OtpServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub otp_service: Arc<dyn OtpService>,
}

impl SharedAppState {
  pub fn new(transport: Arc<dyn MailTransport>, config: &AppConfig) -> Self {
    let otp_service = Arc::new(OtpServiceImpl::new(
      transport,
      config.attachment.clone(),
      config.send_timeout,
    ));

    Self { otp_service }
  }
}

impl AppState for SharedAppState {
  async fn send_otp(&self, req: SendOtpRequest) -> Result<SendReceipt, OtpServiceError> {
    self.otp_service.send_otp(req).await
  }
}
