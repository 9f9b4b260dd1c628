use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::email::{AttachmentSpec, MailRequest};

pub const OTP_LENGTH: usize = 4;
pub const OTP_SUBJECT: &str = "Your One-Time Password";
pub const OTP_TEXT_BODY: &str = "Verify your OTP";

/// `email` is optional so a body without it still deserializes and gets
/// rejected by the service instead of by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SendOtpRequest {
  pub email: Option<String>,
}

/// A short numeric code. Digits are drawn independently, so repeats and
/// leading zeros are expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Otp(String);

impl Otp {
  pub fn generate() -> Self {
    Self::generate_with(&mut rand::thread_rng())
  }

  pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
    let code = (0..OTP_LENGTH)
      .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
      .collect();
    Otp(code)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for Otp {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

pub fn build_otp_mail(recipient: &str, otp: &Otp, attachment: &AttachmentSpec) -> MailRequest {
  MailRequest {
    to: recipient.to_string(),
    subject: OTP_SUBJECT.to_string(),
    html_body: format!(
      r#"<p>Hello Your OTP is <h1 style="color: greenyellow;">{}</h1></p>"#,
      otp
    ),
    text_body: OTP_TEXT_BODY.to_string(),
    attachment: attachment.clone(),
  }
}
