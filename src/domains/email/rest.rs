use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{
  EmailRequest, MessageResponse, SEND_ERROR_PREFIX, SEND_SUCCESS_MESSAGE, TEST_ERROR_PREFIX, TEST_SUCCESS_MESSAGE,
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn email_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/send", post(send_email_handler))
    .route("/test", post(test_email_config_handler))
}

pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  let Json(payload) =
    payload.map_err(|rejection| AppError::bad_request(format!("{}{}", SEND_ERROR_PREFIX, rejection.body_text())))?;

  state
    .send_email(payload)
    .await
    .map(|_| JsonResponse(MessageResponse::new(SEND_SUCCESS_MESSAGE)))
    .map_err(|e| AppError::bad_request(format!("{}{}", SEND_ERROR_PREFIX, e)))
}

pub async fn test_email_config_handler(
  State(state): State<SharedAppState>,
) -> Result<JsonResponse<MessageResponse>, AppError> {
  state
    .send_test_email()
    .await
    .map(|_| JsonResponse(MessageResponse::new(TEST_SUCCESS_MESSAGE)))
    .map_err(|e| AppError::bad_request(format!("{}{}", TEST_ERROR_PREFIX, e)))
}
