use std::{env, net::SocketAddr, time::Duration};

use crate::email::{AttachmentSpec, SmtpConfig};

pub const LISTEN_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub listen_addr: SocketAddr,
  pub smtp: SmtpConfig,
  pub attachment: AttachmentSpec,
  pub send_timeout: Duration,
}

impl Default for AppConfig {
  fn default() -> Self {
    AppConfig {
      listen_addr: SocketAddr::from(LISTEN_ADDR),
      smtp: SmtpConfig::default(),
      attachment: AttachmentSpec::default(),
      send_timeout: Duration::from_secs(DEFAULT_SEND_TIMEOUT_SECS),
    }
  }
}

impl AppConfig {
  /// `USER` doubles as the SMTP login and the From address. Missing
  /// credentials are left empty and surface as a send failure.
  pub fn from_env() -> Self {
    let username = env::var("USER").unwrap_or_default();
    let password = env::var("PASS").unwrap_or_default();

    let send_timeout = env::var("SEND_TIMEOUT_SECS")
      .ok()
      .and_then(|v| v.parse::<u64>().ok())
      .filter(|secs| *secs > 0)
      .unwrap_or(DEFAULT_SEND_TIMEOUT_SECS);

    AppConfig {
      smtp: SmtpConfig {
        from_email: username.clone(),
        username,
        password,
        ..SmtpConfig::default()
      },
      send_timeout: Duration::from_secs(send_timeout),
      ..AppConfig::default()
    }
  }
}
