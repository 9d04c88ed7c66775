use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("database error: {0}")]
  Db(#[from] sea_orm::DbErr),

  #[error("member not found")]
  MemberNotFound,

  #[error("credential not found")]
  CredentialNotFound,

  #[error("credential already exists")]
  CredentialExists,

  #[error("credential usage is full")]
  CapacityExceeded,

  #[error("payment account not found")]
  PaymentNotFound,

  #[error("admin already exists")]
  AdminExists,

  #[error("invalid email or password")]
  InvalidCredentials,

  #[error("missing or expired session")]
  Unauthorized,

  #[error("internal error: {0}")]
  Internal(String),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Database error"),
      Error::MemberNotFound => (StatusCode::NOT_FOUND, "Member not found"),
      Error::CredentialNotFound => {
        (StatusCode::NOT_FOUND, "Credential not found")
      }
      Error::CredentialExists => {
        (StatusCode::CONFLICT, "Credential already exists")
      }
      Error::CapacityExceeded => {
        (StatusCode::CONFLICT, "Credential usage is full")
      }
      Error::PaymentNotFound => {
        (StatusCode::NOT_FOUND, "Payment account not found")
      }
      Error::AdminExists => (StatusCode::CONFLICT, "Admin already exists"),
      Error::InvalidCredentials => {
        (StatusCode::UNAUTHORIZED, "Invalid email or password")
      }
      Error::Unauthorized => {
        (StatusCode::UNAUTHORIZED, "Missing or expired session")
      }
      Error::Internal(_) => {
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
      }
    };

    let body = json::json!({
      "success": false,
      "error": message,
    });

    (status, Json(body)).into_response()
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
