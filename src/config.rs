use std::env;

use anyhow::{anyhow, Context, Result};

use crate::email::{DiagnosticMessage, SmtpConfig};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Which transport backs the mail service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
  Smtp,
  /// Logs outgoing envelopes instead of delivering them.
  Log,
}

impl std::str::FromStr for TransportKind {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "smtp" => Ok(TransportKind::Smtp),
      "log" => Ok(TransportKind::Log),
      other => Err(anyhow!("unknown MAIL_TRANSPORT '{}', expected 'smtp' or 'log'", other)),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_addr: String,
  pub cors_allowed_origin: String,
  pub transport: TransportKind,
  pub smtp: SmtpConfig,
  pub diagnostic: DiagnosticMessage,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary key lookup. Missing keys fall back to defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

    let smtp_defaults = SmtpConfig::default();
    let port = match lookup("SMTP_PORT") {
      Some(raw) => raw
        .trim()
        .parse::<u16>()
        .with_context(|| format!("SMTP_PORT must be a valid port number, got '{}'", raw))?,
      None => smtp_defaults.port,
    };

    let smtp = SmtpConfig {
      host: get_or("SMTP_HOST", &smtp_defaults.host),
      port,
      username: lookup("SMTP_USERNAME").unwrap_or(smtp_defaults.username),
      password: lookup("SMTP_PASSWORD").unwrap_or(smtp_defaults.password),
      from_email: get_or("SMTP_FROM_EMAIL", &smtp_defaults.from_email),
    };

    let diagnostic = DiagnosticMessage {
      recipient: get_or("EMAIL_TEST_RECIPIENT", &DiagnosticMessage::default().recipient),
      ..DiagnosticMessage::default()
    };

    let transport = match lookup("MAIL_TRANSPORT") {
      Some(raw) => raw.parse()?,
      None => TransportKind::Smtp,
    };

    Ok(AppConfig {
      server_addr: get_or("SERVER_ADDR", DEFAULT_SERVER_ADDR),
      cors_allowed_origin: get_or("CORS_ALLOWED_ORIGIN", DEFAULT_CORS_ORIGIN),
      transport,
      smtp,
      diagnostic,
    })
  }
}
