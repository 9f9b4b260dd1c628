use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{MailRequest, MailTransport, SendReceipt, TransportError},
  state::SharedAppState,
};

enum Behavior {
  Succeed,
  Fail(fn() -> TransportError),
  Hang,
}

/// Records every request it is handed and answers according to its behavior.
pub struct StubTransport {
  behavior: Behavior,
  sent: Mutex<Vec<MailRequest>>,
}

impl StubTransport {
  pub fn succeeding() -> Self {
    Self::with(Behavior::Succeed)
  }

  pub fn failing(error: fn() -> TransportError) -> Self {
    Self::with(Behavior::Fail(error))
  }

  pub fn hanging() -> Self {
    Self::with(Behavior::Hang)
  }

  fn with(behavior: Behavior) -> Self {
    Self {
      behavior,
      sent: Mutex::new(Vec::new()),
    }
  }

  pub fn sent(&self) -> Vec<MailRequest> {
    self.sent.lock().expect("stub lock").clone()
  }

  pub fn otp_in(request: &MailRequest) -> Option<String> {
    let start = request.html_body.find("\">")? + 2;
    let end = request.html_body[start..].find("</h1>")? + start;
    Some(request.html_body[start..end].to_string())
  }
}

#[async_trait]
impl MailTransport for StubTransport {
  async fn send(&self, request: &MailRequest) -> Result<SendReceipt, TransportError> {
    self.sent.lock().expect("stub lock").push(request.clone());

    match &self.behavior {
      Behavior::Succeed => Ok(SendReceipt {
        code: "250".to_string(),
        message: vec!["2.0.0 OK".to_string()],
      }),
      Behavior::Fail(error) => Err(error()),
      Behavior::Hang => {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(TransportError::Smtp("unreachable".to_string()))
      }
    }
  }
}

pub fn app_with_transport(transport: Arc<dyn MailTransport>, config: &AppConfig) -> Router {
  let state = SharedAppState::new(transport, config);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, HeaderMap, Bytes) {
  post_raw(app, uri, serde_json::to_vec(body).expect("serialize request body")).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}
