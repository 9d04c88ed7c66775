use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use super::auth::AdminSession;
use crate::{
  entity::{Plan, credential, member, payment},
  prelude::*,
  state::AppState,
  sv::{
    member::{MemberStats, MemberView, NewMember, UpdateMember},
    payment::PaymentFields,
  },
};

pub async fn health() -> &'static str {
  "OK"
}

fn ok() -> Json<json::Value> {
  Json(json::json!({ "success": true }))
}

// ---- auth ----

#[derive(Debug, Deserialize)]
pub struct RegisterReq {
  pub email: String,
  pub username: String,
  pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginReq {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionRes {
  pub success: bool,
  pub token: String,
  pub username: String,
}

pub async fn register(
  State(app): State<Arc<AppState>>,
  Json(req): Json<RegisterReq>,
) -> Result<Json<SessionRes>> {
  let admin =
    app.sv().admin.register(req.email, req.username, &req.password).await?;
  let token = app.issue_session(admin.id);

  info!("admin `{}` registered", admin.username);
  Ok(Json(SessionRes { success: true, token, username: admin.username }))
}

pub async fn login(
  State(app): State<Arc<AppState>>,
  Json(req): Json<LoginReq>,
) -> Result<Json<SessionRes>> {
  let admin = app.sv().admin.verify(&req.email, &req.password).await?;
  let token = app.issue_session(admin.id);

  Ok(Json(SessionRes { success: true, token, username: admin.username }))
}

pub async fn logout(
  session: AdminSession,
  State(app): State<Arc<AppState>>,
) -> Json<json::Value> {
  app.revoke_session(&session.token);
  ok()
}

// ---- members ----

#[derive(Debug, Deserialize)]
pub struct MemberReq {
  pub name: String,
  pub phone: String,
  #[serde(default)]
  pub plan: Plan,
  #[serde(default)]
  pub credential_email: Option<String>,
  pub starts_on: Date,
  pub ends_on: Date,
}

#[derive(Debug, Deserialize)]
pub struct MemberPatchReq {
  pub name: String,
  pub phone: String,
  pub starts_on: Date,
  pub ends_on: Date,
}

pub async fn list_members(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberView>>> {
  Ok(Json(app.sv().member.all().await?))
}

pub async fn member_stats(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
) -> Result<Json<MemberStats>> {
  Ok(Json(app.sv().member.stats().await?))
}

pub async fn create_member(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Json(req): Json<MemberReq>,
) -> Result<Json<member::Model>> {
  let member = app
    .sv()
    .member
    .create(NewMember {
      name: req.name,
      phone: req.phone,
      plan: req.plan,
      credential_email: req.credential_email,
      starts_on: req.starts_on,
      ends_on: req.ends_on,
    })
    .await?;

  Ok(Json(member))
}

pub async fn update_member(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(req): Json<MemberPatchReq>,
) -> Result<Json<member::Model>> {
  let member = app
    .sv()
    .member
    .update(id, UpdateMember {
      name: req.name,
      phone: req.phone,
      starts_on: req.starts_on,
      ends_on: req.ends_on,
    })
    .await?;

  Ok(Json(member))
}

pub async fn delete_member(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<Json<json::Value>> {
  app.sv().member.delete(id).await?;
  Ok(ok())
}

// ---- credentials ----

#[derive(Debug, Deserialize)]
pub struct CredentialReq {
  pub email: String,
  pub email_password: String,
}

#[derive(Debug, Deserialize)]
pub struct PasswordReq {
  pub email_password: String,
}

pub async fn list_credentials(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<credential::Model>>> {
  Ok(Json(app.sv().credential.all().await?))
}

pub async fn create_credential(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Json(req): Json<CredentialReq>,
) -> Result<Json<credential::Model>> {
  let credential =
    app.sv().credential.create(req.email, req.email_password).await?;
  Ok(Json(credential))
}

pub async fn set_credential_password(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Path(email): Path<String>,
  Json(req): Json<PasswordReq>,
) -> Result<Json<json::Value>> {
  app.sv().credential.set_password(&email, req.email_password).await?;
  Ok(ok())
}

// ---- payments ----

#[derive(Debug, Deserialize)]
pub struct PaymentReq {
  pub owner: String,
  pub card_number: String,
  pub expires: String,
  pub cvc: String,
  pub bank_name: String,
}

impl From<PaymentReq> for PaymentFields {
  fn from(req: PaymentReq) -> Self {
    Self {
      owner: req.owner,
      card_number: req.card_number,
      expires: req.expires,
      cvc: req.cvc,
      bank_name: req.bank_name,
    }
  }
}

pub async fn list_payments(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<payment::Model>>> {
  Ok(Json(app.sv().payment.all().await?))
}

pub async fn create_payment(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Json(req): Json<PaymentReq>,
) -> Result<Json<payment::Model>> {
  Ok(Json(app.sv().payment.create(req.into()).await?))
}

pub async fn update_payment(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Path(id): Path<i64>,
  Json(req): Json<PaymentReq>,
) -> Result<Json<payment::Model>> {
  Ok(Json(app.sv().payment.update(id, req.into()).await?))
}

pub async fn delete_payment(
  _session: AdminSession,
  State(app): State<Arc<AppState>>,
  Path(id): Path<i64>,
) -> Result<Json<json::Value>> {
  app.sv().payment.delete(id).await?;
  Ok(ok())
}
