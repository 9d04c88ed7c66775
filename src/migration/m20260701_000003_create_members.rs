use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(Members::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(Members::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(Members::Name).string().not_null())
          .col(ColumnDef::new(Members::Phone).string().not_null())
          .col(
            ColumnDef::new(Members::Plan)
              .string()
              .not_null()
              .default("netflix"),
          )
          // no FK: the usage ledger keeps the count in lockstep itself
          .col(ColumnDef::new(Members::CredentialEmail).string().null())
          .col(ColumnDef::new(Members::StartsOn).date().null())
          .col(ColumnDef::new(Members::EndsOn).date().null())
          .col(ColumnDef::new(Members::CreatedAt).date_time().not_null())
          .to_owned(),
      )
      .await?;

    manager
      .create_index(
        Index::create()
          .name("idx_members_credential")
          .table(Members::Table)
          .col(Members::CredentialEmail)
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager.drop_table(Table::drop().table(Members::Table).to_owned()).await
  }
}

#[derive(DeriveIden)]
pub enum Members {
  Table,
  Id,
  Name,
  Phone,
  Plan,
  CredentialEmail,
  StartsOn,
  EndsOn,
  CreatedAt,
}
