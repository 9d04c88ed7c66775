use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Credentials::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Credentials::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(Credentials::Email).string().not_null().unique_key(),
          )
          .col(
            ColumnDef::new(Credentials::EmailPassword).string().not_null(),
          )
          .col(
            ColumnDef::new(Credentials::UsageCount)
              .integer()
              .not_null()
              .default(0),
          )
          .col(ColumnDef::new(Credentials::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Credentials::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Credentials {
  Table,
  Id,
  Email,
  EmailPassword,
  UsageCount,
  CreatedAt,
}
