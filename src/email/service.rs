use std::sync::Arc;

use crate::email::{
  transport::{MailTransport, TransportError},
  types::{DiagnosticMessage, Envelope},
};

pub struct EmailService {
  from_email: String,
  diagnostic: DiagnosticMessage,
  transport: Arc<dyn MailTransport>,
}

impl EmailService {
  pub fn new(from_email: impl Into<String>, diagnostic: DiagnosticMessage, transport: Arc<dyn MailTransport>) -> Self {
    EmailService {
      from_email: from_email.into(),
      diagnostic,
      transport,
    }
  }

  pub fn from_email(&self) -> &str {
    &self.from_email
  }

  /// Sends a plain-text email from the configured sender. Transport errors are returned as-is.
  pub async fn send_email(&self, to: Vec<String>, subject: String, content: String) -> Result<(), TransportError> {
    let envelope = Envelope::new(self.from_email.clone(), to, subject, content);

    match self.transport.submit(&envelope).await {
      Ok(()) => {
        tracing::info!("Email sent to {} recipient(s)", envelope.to.len());
        Ok(())
      }
      Err(e) => {
        tracing::error!("Failed to send email to {:?}: {}", envelope.to, e);
        Err(e)
      }
    }
  }

  pub async fn send_test_email(&self) -> Result<(), TransportError> {
    self
      .send_email(
        vec![self.diagnostic.recipient.clone()],
        self.diagnostic.subject.clone(),
        self.diagnostic.body.clone(),
      )
      .await
  }
}
