use uuid::Uuid;

use crate::{migration::Migrator, prelude::*, sv};

/// A server-issued admin session. The token is the map key; the client
/// only ever holds the opaque token.
#[derive(Debug, Clone)]
pub struct Session {
  pub admin_id: i64,
  pub last_seen: DateTime,
}

pub type Sessions = DashMap<String, Session>;

#[derive(Debug, Clone)]
pub struct Config {
  /// Seconds of idleness before a session token stops validating.
  pub session_lifetime: i64,
}

impl Default for Config {
  fn default() -> Self {
    Self { session_lifetime: 3600 }
  }
}

pub struct Services<'a> {
  pub admin: sv::Admin<'a>,
  pub credential: sv::Credential<'a>,
  pub member: sv::Member<'a>,
  pub payment: sv::Payment<'a>,
}

pub struct AppState {
  pub db: DatabaseConnection,
  pub sessions: Sessions,
  pub config: Config,
}

impl AppState {
  pub async fn new(db_url: &str) -> Self {
    Self::with_config(db_url, Config::default()).await
  }

  pub async fn with_config(db_url: &str, config: Config) -> Self {
    info!("Connecting to database...");
    let db =
      Database::connect(db_url).await.expect("Failed to connect to database");

    info!("Running migrations...");
    Migrator::up(&db, None).await.expect("Failed to run migrations");

    Self { db, sessions: DashMap::new(), config }
  }

  pub fn sv(&self) -> Services<'_> {
    Services {
      admin: sv::Admin::new(&self.db),
      credential: sv::Credential::new(&self.db),
      member: sv::Member::new(&self.db),
      payment: sv::Payment::new(&self.db),
    }
  }

  pub fn issue_session(&self, admin_id: i64) -> String {
    let token = Uuid::new_v4().simple().to_string();
    let now = Utc::now().naive_utc();

    self.sessions.insert(token.clone(), Session { admin_id, last_seen: now });
    token
  }

  /// Look up a token, refreshing its idle timer. Stale tokens are
  /// dropped on sight rather than waiting for the collector.
  pub fn validate_session(&self, token: &str) -> Option<i64> {
    let now = Utc::now().naive_utc();

    let admin_id = {
      let mut session = self.sessions.get_mut(token)?;
      if (now - session.last_seen).num_seconds()
        >= self.config.session_lifetime
      {
        None
      } else {
        session.last_seen = now;
        Some(session.admin_id)
      }
    };

    if admin_id.is_none() {
      self.sessions.remove(token);
    }
    admin_id
  }

  pub fn revoke_session(&self, token: &str) {
    self.sessions.remove(token);
  }

  pub fn gc_sessions(&self) {
    let now = Utc::now().naive_utc();
    let timeout = self.config.session_lifetime;

    self
      .sessions
      .retain(|_token, session| (now - session.last_seen).num_seconds() < timeout);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn session_roundtrip() {
    let app = AppState::new("sqlite::memory:").await;

    let token = app.issue_session(1);
    assert_eq!(app.validate_session(&token), Some(1));

    app.revoke_session(&token);
    assert_eq!(app.validate_session(&token), None);
  }

  #[tokio::test]
  async fn idle_sessions_expire() {
    let app = AppState::with_config(
      "sqlite::memory:",
      Config { session_lifetime: 0 },
    )
    .await;

    let token = app.issue_session(1);
    assert_eq!(app.validate_session(&token), None);
    assert!(app.sessions.is_empty());
  }

  #[tokio::test]
  async fn gc_drops_only_stale_sessions() {
    let app = AppState::new("sqlite::memory:").await;

    let fresh = app.issue_session(1);
    let stale = app.issue_session(2);
    app.sessions.get_mut(&stale).unwrap().last_seen =
      Utc::now().naive_utc() - chrono::TimeDelta::seconds(7200);

    app.gc_sessions();

    assert!(app.sessions.contains_key(&fresh));
    assert!(!app.sessions.contains_key(&stale));
  }
}
