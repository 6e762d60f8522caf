use serde::{Deserialize, Serialize};

pub const SEND_SUCCESS_MESSAGE: &str = "Email envoyé avec succès";
pub const SEND_ERROR_PREFIX: &str = "Erreur lors de l'envoi: ";
pub const TEST_SUCCESS_MESSAGE: &str = "Configuration email testée avec succès";
pub const TEST_ERROR_PREFIX: &str = "Erreur de configuration: ";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailRequest {
  pub to: Vec<String>,
  pub subject: String,
  pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

impl MessageResponse {
  pub fn new(message: impl Into<String>) -> Self {
    MessageResponse {
      message: message.into(),
    }
  }
}
