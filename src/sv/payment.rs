//! Payment account service - plain CRUD over card-style secrets

use crate::{entity::payment, prelude::*};

pub struct Payment<'a> {
  db: &'a DatabaseConnection,
}

#[derive(Debug, Clone)]
pub struct PaymentFields {
  pub owner: String,
  pub card_number: String,
  pub expires: String,
  pub cvc: String,
  pub bank_name: String,
}

impl<'a> Payment<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn create(&self, fields: PaymentFields) -> Result<payment::Model> {
    let now = Utc::now().naive_utc();

    let payment = payment::ActiveModel {
      id: NotSet,
      owner: Set(fields.owner),
      card_number: Set(fields.card_number),
      expires: Set(fields.expires),
      cvc: Set(fields.cvc),
      bank_name: Set(fields.bank_name),
      created_at: Set(now),
    };

    Ok(payment.insert(self.db).await?)
  }

  pub async fn all(&self) -> Result<Vec<payment::Model>> {
    let payments = payment::Entity::find()
      .order_by_asc(payment::Column::Id)
      .all(self.db)
      .await?;
    Ok(payments)
  }

  pub async fn update(
    &self,
    id: i64,
    fields: PaymentFields,
  ) -> Result<payment::Model> {
    let payment = payment::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::PaymentNotFound)?;

    let payment = payment::ActiveModel {
      owner: Set(fields.owner),
      card_number: Set(fields.card_number),
      expires: Set(fields.expires),
      cvc: Set(fields.cvc),
      bank_name: Set(fields.bank_name),
      ..payment.into()
    }
    .update(self.db)
    .await?;

    Ok(payment)
  }

  pub async fn delete(&self, id: i64) -> Result<()> {
    let payment = payment::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::PaymentNotFound)?;

    payment::Entity::delete_by_id(payment.id).exec(self.db).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{DbBackend, Schema};

  use super::*;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);
    let stmt = schema.create_table_from_entity(payment::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  fn fields(owner: &str) -> PaymentFields {
    PaymentFields {
      owner: owner.to_string(),
      card_number: "4242424242424242".to_string(),
      expires: "12/27".to_string(),
      cvc: "123".to_string(),
      bank_name: "First National".to_string(),
    }
  }

  #[tokio::test]
  async fn crud_roundtrip() {
    let db = setup_test_db().await;
    let sv = Payment::new(&db);

    let created = sv.create(fields("alice")).await.unwrap();
    assert_eq!(sv.all().await.unwrap().len(), 1);

    let mut patch = fields("alice");
    patch.bank_name = "Second National".to_string();
    let updated = sv.update(created.id, patch).await.unwrap();
    assert_eq!(updated.bank_name, "Second National");

    sv.delete(created.id).await.unwrap();
    assert!(sv.all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn missing_account_errors() {
    let db = setup_test_db().await;
    let sv = Payment::new(&db);

    assert!(matches!(
      sv.update(7, fields("nobody")).await,
      Err(Error::PaymentNotFound)
    ));
    assert!(matches!(sv.delete(7).await, Err(Error::PaymentNotFound)));
  }
}
