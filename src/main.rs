use anyhow::Context;
use axum::http::HeaderValue;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use binet_mailer::app::create_app;
use binet_mailer::config::AppConfig;
use binet_mailer::state::SharedAppState;
use binet_mailer::utils::init_email_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = AppConfig::from_env()?;
  let allowed_origin = HeaderValue::from_str(&config.cors_allowed_origin)
    .with_context(|| format!("invalid CORS_ALLOWED_ORIGIN '{}'", config.cors_allowed_origin))?;

  let email_service = init_email_service(&config)?;
  tracing::info!(
    "Email service ready (transport: {:?}, sender: {})",
    config.transport,
    email_service.from_email()
  );

  let app_state = SharedAppState::new(email_service);
  let app = create_app(app_state, allowed_origin);

  let listener = tokio::net::TcpListener::bind(&config.server_addr)
    .await
    .with_context(|| format!("failed to bind {}", config.server_addr))?;

  tracing::info!("Server running on http://{}", config.server_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
