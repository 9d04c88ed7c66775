//! Database migrations using SeaORM

use sea_orm_migration::prelude::*;

mod m20260701_000001_create_admins;
mod m20260701_000002_create_credentials;
mod m20260701_000003_create_members;
mod m20260701_000004_create_payment_accounts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![
      Box::new(m20260701_000001_create_admins::Migration),
      Box::new(m20260701_000002_create_credentials::Migration),
      Box::new(m20260701_000003_create_members::Migration),
      Box::new(m20260701_000004_create_payment_accounts::Migration),
    ]
  }
}
