//! Member entity - one row per managed subscription record

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::credential;

/// How many members may share one stored credential.
pub const USAGE_CAP: i32 = 10;

/// Subscription cohort
#[derive(
  Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize,
  Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum Plan {
  #[sea_orm(string_value = "netflix")]
  Netflix,
  #[sea_orm(string_value = "prime")]
  Prime,
}

impl Default for Plan {
  fn default() -> Self {
    Self::Netflix
  }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "members")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i64,
  pub name: String,
  pub phone: String,
  pub plan: Plan,
  /// Email of the shared credential this member uses, if any.
  pub credential_email: Option<String>,
  pub starts_on: Option<Date>,
  pub ends_on: Option<Date>,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
  #[sea_orm(
    belongs_to = "credential::Entity",
    from = "Column::CredentialEmail",
    to = "credential::Column::Email"
  )]
  Credential,
}

impl Related<credential::Entity> for Entity {
  fn to() -> RelationDef {
    Relation::Credential.def()
  }
}

impl ActiveModelBehavior for ActiveModel {}
