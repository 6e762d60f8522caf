use axum::{
  http::{header::CONTENT_TYPE, HeaderValue, Method},
  Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{domains::email::rest::email_routes, state::SharedAppState};

pub fn create_app(state: SharedAppState, allowed_origin: HeaderValue) -> Router {
  let cors = CorsLayer::new()
    .allow_origin(allowed_origin)
    .allow_methods([Method::POST, Method::OPTIONS])
    .allow_headers([CONTENT_TYPE]);

  Router::new()
    .nest("/api/emails", email_routes())
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
