use crate::email::types::{AttachmentSpec, MailRequest, SendReceipt, SmtpConfig, TransportError};
use crate::email::MailTransport;
use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
  transport::smtp::{authentication::Credentials, response::Response},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  pub(crate) async fn build_message(&self, request: &MailRequest) -> Result<Message, TransportError> {
    let from: Mailbox = self
      .smtp_config
      .from_email
      .parse()
      .map_err(|e| TransportError::InvalidSender(format!("{}: {}", self.smtp_config.from_email, e)))?;
    let to: Mailbox = request
      .to
      .parse()
      .map_err(|e| TransportError::InvalidRecipient(format!("{}: {}", request.to, e)))?;

    let attachment = load_attachment(&request.attachment).await?;

    Message::builder()
      .from(from)
      .to(to)
      .subject(&request.subject)
      .multipart(
        MultiPart::mixed()
          .multipart(MultiPart::alternative_plain_html(
            request.text_body.clone(),
            request.html_body.clone(),
          ))
          .singlepart(attachment),
      )
      .map_err(|e| TransportError::Message(e.to_string()))
  }
}

// Read from disk on every send.
async fn load_attachment(spec: &AttachmentSpec) -> Result<SinglePart, TransportError> {
  let content = tokio::fs::read(&spec.path)
    .await
    .map_err(|e| TransportError::Attachment(format!("{}: {}", spec.path, e)))?;
  let content_type = ContentType::parse(&spec.content_type)
    .map_err(|e| TransportError::Attachment(format!("{}: {}", spec.content_type, e)))?;

  Ok(Attachment::new(spec.filename.clone()).body(content, content_type))
}

#[async_trait]
impl MailTransport for EmailService {
  async fn send(&self, request: &MailRequest) -> Result<SendReceipt, TransportError> {
    let email = self.build_message(request).await?;

    let response = self
      .transporter
      .send(email)
      .await
      .map_err(|e| TransportError::Smtp(e.to_string()))?;

    Ok(SendReceipt::from(response))
  }
}

impl From<Response> for SendReceipt {
  fn from(response: Response) -> Self {
    SendReceipt {
      code: response.code().to_string(),
      message: response.message().map(str::to_string).collect(),
    }
  }
}
