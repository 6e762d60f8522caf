use std::sync::Arc;

use crate::{
  config::{AppConfig, TransportKind},
  email::{EmailService, LogMailTransport, MailTransport, SmtpMailTransport},
};

pub mod error;

pub fn init_email_service(config: &AppConfig) -> anyhow::Result<EmailService> {
  let transport: Arc<dyn MailTransport> = match config.transport {
    TransportKind::Smtp => Arc::new(SmtpMailTransport::new(&config.smtp)?),
    TransportKind::Log => {
      tracing::warn!("MAIL_TRANSPORT=log: emails will be logged, not delivered");
      Arc::new(LogMailTransport)
    }
  };

  Ok(EmailService::new(
    config.smtp.from_email.clone(),
    config.diagnostic.clone(),
    transport,
  ))
}
