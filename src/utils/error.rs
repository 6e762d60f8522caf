use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};

use crate::domains::email::model::MessageResponse;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    (self.status_code, Json(MessageResponse::new(self.message))).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_bad_request_renders_message_body() {
    let response = AppError::bad_request("boom").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let payload: MessageResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload.message, "boom");
  }
}
