//! Payment account entity - card-style secrets, plain CRUD

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_accounts")]
pub struct Model {
  #[sea_orm(primary_key)]
  pub id: i64,
  pub owner: String,
  pub card_number: String,
  pub expires: String,
  pub cvc: String,
  pub bank_name: String,
  pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
