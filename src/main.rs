use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use dotenvy::dotenv;

use otp_mailer::app::create_app;
use otp_mailer::config::AppConfig;
use otp_mailer::email::EmailService;
use otp_mailer::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("otp_mailer=info,tower_http=info")),
    )
    .init();

  let config = AppConfig::from_env();

  let email_service = EmailService::new(config.smtp.clone())?;
  let app_state = SharedAppState::new(Arc::new(email_service), &config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

  tracing::info!("Server is running on http://{}", config.listen_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
