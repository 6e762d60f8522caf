use std::sync::Arc;

use crate::{
  domains::email::model::EmailRequest,
  email::{EmailService, TransportError},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_email(&self, req: EmailRequest) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
  fn send_test_email(&self) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub email_service: Arc<EmailService>,
}

impl SharedAppState {
  pub fn new(email_service: EmailService) -> Self {
    Self {
      email_service: Arc::new(email_service),
    }
  }
}

impl AppState for SharedAppState {
  async fn send_email(&self, req: EmailRequest) -> Result<(), TransportError> {
    self
      .email_service
      .send_email(req.to, req.subject, req.content)
      .await
  }

  async fn send_test_email(&self) -> Result<(), TransportError> {
    self.email_service.send_test_email().await
  }
}
