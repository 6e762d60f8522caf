use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

use crate::email::types::{Envelope, SmtpConfig};

#[derive(Debug, Clone, Error)]
pub enum TransportError {
  #[error("invalid address '{address}': {reason}")]
  InvalidAddress { address: String, reason: String },
  #[error("failed to build message: {0}")]
  Build(String),
  #[error("{0}")]
  Smtp(String),
}

/// Delivers a fully assembled envelope. Implementations report failure, they never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn submit(&self, envelope: &Envelope) -> Result<(), TransportError>;
}

pub struct SmtpMailTransport {
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
  pub fn new(smtp_config: &SmtpConfig) -> Result<Self, TransportError> {
    let builder = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)
        .map_err(|e| TransportError::Smtp(e.to_string()))?
    };

    let builder = builder.port(smtp_config.port);
    let builder = if smtp_config.username.is_empty() {
      builder
    } else {
      builder.credentials(Credentials::new(
        smtp_config.username.clone(),
        smtp_config.password.clone(),
      ))
    };

    Ok(SmtpMailTransport {
      transporter: builder.build(),
    })
  }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, TransportError> {
  address.parse().map_err(|e: lettre::address::AddressError| TransportError::InvalidAddress {
    address: address.to_string(),
    reason: e.to_string(),
  })
}

/// Builds a single plain-text message addressed to every recipient at once.
pub(crate) fn build_message(envelope: &Envelope) -> Result<Message, TransportError> {
  let mut builder = Message::builder()
    .from(parse_mailbox(&envelope.from)?)
    .subject(&envelope.subject)
    .header(ContentType::TEXT_PLAIN);

  for recipient in &envelope.to {
    builder = builder.to(parse_mailbox(recipient)?);
  }

  builder
    .body(envelope.body.clone())
    .map_err(|e| TransportError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
  async fn submit(&self, envelope: &Envelope) -> Result<(), TransportError> {
    let message = build_message(envelope)?;

    self
      .transporter
      .send(message)
      .await
      .map_err(|e| TransportError::Smtp(e.to_string()))?;

    Ok(())
  }
}

/// Accepts every envelope and only logs it. Used when no relay is available.
#[derive(Debug, Default, Clone)]
pub struct LogMailTransport;

#[async_trait]
impl MailTransport for LogMailTransport {
  async fn submit(&self, envelope: &Envelope) -> Result<(), TransportError> {
    tracing::info!(
      from = %envelope.from,
      to = ?envelope.to,
      subject = %envelope.subject,
      body_len = envelope.body.len(),
      "Simulated email delivery"
    );
    Ok(())
  }
}
