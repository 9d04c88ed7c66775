//! Subscription admin service
//!
//! Architecture:
//! - SeaORM for database access (SQLite)
//! - Axum for the HTTP API with rate limiting
//! - Server-issued bearer sessions for admin auth
//! - Tokio for async runtime

mod entity;
mod error;
mod lifecycle;
mod migration;
mod plugins;
mod prelude;
mod state;
mod sv;

use std::{env, sync::Arc};

use tracing_subscriber::{
  EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{prelude::*, state::AppState};

#[tokio::main]
async fn main() {
  dotenvy::dotenv().ok();

  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      "subdesk=debug,tower_http=debug,axum=trace,sea_orm=warn".into()
    }))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let db_url = env::var("DATABASE_URL")
    .unwrap_or_else(|_| "sqlite:subdesk.db?mode=rwc".into());

  info!(
    "Starting subscription admin service v{}",
    env!("CARGO_PKG_VERSION")
  );

  let app = Arc::new(AppState::new(&db_url).await);

  bootstrap_admin(&app).await;

  plugins::App::new()
    .register(plugins::server::Plugin)
    .register(plugins::cron::Plugin)
    .run(app)
    .await;

  tokio::signal::ctrl_c().await.expect("Failed to listen for shutdown");
  info!("Shutting down");
}

/// Seed the first operator from `ADMIN_BOOTSTRAP=email:username:password`
/// so a fresh deployment has a login before the register endpoint is hit.
async fn bootstrap_admin(app: &AppState) {
  let Ok(raw) = env::var("ADMIN_BOOTSTRAP") else {
    return;
  };

  let mut parts = raw.splitn(3, ':');
  let (Some(email), Some(username), Some(password)) =
    (parts.next(), parts.next(), parts.next())
  else {
    warn!("ADMIN_BOOTSTRAP must look like email:username:password");
    return;
  };

  match app
    .sv()
    .admin
    .register(email.to_string(), username.to_string(), password)
    .await
  {
    Ok(admin) => info!("Bootstrapped admin `{}`", admin.username),
    Err(Error::AdminExists) => {}
    Err(err) => error!("Admin bootstrap failed: {err}"),
  }
}
