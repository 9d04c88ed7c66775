//! Credential entity - shared logins handed out to members
//!
//! `usage_count` mirrors the number of live member rows naming this
//! credential's email. The ledger in `sv::Member` keeps it in lockstep.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::member;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "credentials")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i64,
  #[sea_orm(unique)]
  pub email: String,
  pub email_password: String,
  pub usage_count: i32,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(has_many = "member::Entity")]
  Member,
}

impl Related<member::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Member.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
