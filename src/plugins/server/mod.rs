mod auth;
mod handlers;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use axum::{
  Router,
  routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{prelude::*, state::AppState};

pub struct Plugin;

#[async_trait]
impl super::Plugin for Plugin {
  async fn start(&self, app: Arc<AppState>) -> anyhow::Result<()> {
    let governor_conf = Arc::new(
      GovernorConfigBuilder::default()
        .per_second(2)
        .burst_size(100)
        .finish()
        .context("Failed to build rate limiter config")?,
    );

    let limiter = governor_conf.limiter().clone();

    let router = Router::new()
      .route("/health", get(handlers::health))
      .route("/api/auth/register", post(handlers::register))
      .route("/api/auth/login", post(handlers::login))
      .route("/api/auth/logout", post(handlers::logout))
      .route(
        "/api/members",
        get(handlers::list_members).post(handlers::create_member),
      )
      .route("/api/members/stats", get(handlers::member_stats))
      .route(
        "/api/members/{id}",
        put(handlers::update_member).delete(handlers::delete_member),
      )
      .route(
        "/api/credentials",
        get(handlers::list_credentials).post(handlers::create_credential),
      )
      .route(
        "/api/credentials/{email}/password",
        put(handlers::set_credential_password),
      )
      .route(
        "/api/payments",
        get(handlers::list_payments).post(handlers::create_payment),
      )
      .route(
        "/api/payments/{id}",
        put(handlers::update_payment).delete(handlers::delete_payment),
      )
      .layer(
        ServiceBuilder::new()
          .layer(TraceLayer::new_for_http())
          .layer(GovernorLayer::new(governor_conf))
          .layer(
            CorsLayer::new()
              .allow_origin(Any)
              .allow_methods(Any)
              .allow_headers(Any),
          ),
      )
      .with_state(app)
      .into_make_service_with_connect_info::<SocketAddr>();

    let port: u16 =
      std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
      .await
      .context("Failed to bind HTTP listener")?;
    tracing::info!("HTTP Server listening on {addr}");

    let limiter = async {
      loop {
        tokio::time::sleep(Duration::from_secs(60)).await;
        limiter.retain_recent();
      }
    };

    let server = async {
      axum::serve(listener, router).await.context("Axum server error")
    };

    tokio::select! {
      result = server => {
        match &result {
            Ok(_) => info!("Server stopped gracefully"),
            Err(err) => error!("Server stopped with error: {err}"),
        }
        result
      }
      _ = limiter => {
        error!("Rate limiter cleaner stopped unexpectedly!");
        Ok(())
      }
    }
  }
}
