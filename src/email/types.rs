pub const DEFAULT_FROM_EMAIL: &str = "binet.maroc@gmail.com";
pub const DEFAULT_TEST_RECIPIENT: &str = "test@example.com";
pub const DIAGNOSTIC_SUBJECT: &str = "Test Configuration BINET";
pub const DIAGNOSTIC_BODY: &str = "Test de configuration email depuis l'interface d'administration BINET.\n\nCe message confirme que la configuration email fonctionne correctement.";

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
  pub from_email: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
      from_email: DEFAULT_FROM_EMAIL.to_string(),
    }
  }
}

/// The fixed message sent by the configuration test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
  pub recipient: String,
  pub subject: String,
  pub body: String,
}

impl Default for DiagnosticMessage {
  fn default() -> Self {
    DiagnosticMessage {
      recipient: DEFAULT_TEST_RECIPIENT.to_string(),
      subject: DIAGNOSTIC_SUBJECT.to_string(),
      body: DIAGNOSTIC_BODY.to_string(),
    }
  }
}

/// A plain-text message as handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub body: String,
}

impl Envelope {
  pub fn new(from: String, to: Vec<String>, subject: String, body: String) -> Self {
    Envelope { from, to, subject, body }
  }
}
