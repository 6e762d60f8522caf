use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderValue, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{DiagnosticMessage, EmailService, Envelope, MailTransport, SmtpConfig, TransportError},
  state::SharedAppState,
};

pub const TEST_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Keeps every submitted envelope, optionally failing each submission.
#[derive(Clone, Default)]
pub struct RecordingTransport {
  sent: Arc<Mutex<Vec<Envelope>>>,
  failure: Option<TransportError>,
}

impl RecordingTransport {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing(error: TransportError) -> Self {
    Self {
      failure: Some(error),
      ..Self::default()
    }
  }

  pub fn sent(&self) -> Vec<Envelope> {
    self.sent.lock().expect("lock sent envelopes").clone()
  }
}

#[async_trait]
impl MailTransport for RecordingTransport {
  async fn submit(&self, envelope: &Envelope) -> Result<(), TransportError> {
    if let Some(error) = &self.failure {
      return Err(error.clone());
    }
    self.sent.lock().expect("lock sent envelopes").push(envelope.clone());
    Ok(())
  }
}

pub fn app_with_transport(transport: RecordingTransport) -> Router {
  let email_service = EmailService::new(
    SmtpConfig::default().from_email,
    DiagnosticMessage::default(),
    Arc::new(transport),
  );
  create_app(
    SharedAppState::new(email_service),
    HeaderValue::from_static(TEST_ALLOWED_ORIGIN),
  )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}
