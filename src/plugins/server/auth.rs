use std::sync::Arc;

use axum::{
  extract::FromRequestParts,
  http::{header, request::Parts},
};

use crate::{prelude::*, state::AppState};

/// Guard for admin-only routes: a bearer token that resolves to a live
/// server-side session. The client never asserts its own identity.
pub struct AdminSession {
  pub admin_id: i64,
  pub token: String,
}

impl FromRequestParts<Arc<AppState>> for AdminSession {
  type Rejection = Error;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &Arc<AppState>,
  ) -> Result<Self> {
    let token = parts
      .headers
      .get(header::AUTHORIZATION)
      .and_then(|value| value.to_str().ok())
      .and_then(|value| value.strip_prefix("Bearer "))
      .ok_or(Error::Unauthorized)?;

    let admin_id =
      state.validate_session(token).ok_or(Error::Unauthorized)?;

    Ok(Self { admin_id, token: token.to_string() })
  }
}
