use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(PaymentAccounts::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(PaymentAccounts::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(ColumnDef::new(PaymentAccounts::Owner).string().not_null())
          .col(ColumnDef::new(PaymentAccounts::CardNumber).string().not_null())
          .col(ColumnDef::new(PaymentAccounts::Expires).string().not_null())
          .col(ColumnDef::new(PaymentAccounts::Cvc).string().not_null())
          .col(ColumnDef::new(PaymentAccounts::BankName).string().not_null())
          .col(
            ColumnDef::new(PaymentAccounts::CreatedAt).date_time().not_null(),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(PaymentAccounts::Table).to_owned())
      .await
  }
}

#[derive(DeriveIden)]
pub enum PaymentAccounts {
  Table,
  Id,
  Owner,
  CardNumber,
  Expires,
  Cvc,
  BankName,
  CreatedAt,
}
