//! Credential service - shared logins looked up by email

use crate::{entity::credential, prelude::*};

pub struct Credential<'a> {
  db: &'a DatabaseConnection,
}

impl<'a> Credential<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Store a new shared login with an empty usage ledger.
  pub async fn create(
    &self,
    email: String,
    email_password: String,
  ) -> Result<credential::Model> {
    let existing = credential::Entity::find()
      .filter(credential::Column::Email.eq(&email))
      .one(self.db)
      .await?;

    if existing.is_some() {
      return Err(Error::CredentialExists);
    }

    let now = Utc::now().naive_utc();
    let credential = credential::ActiveModel {
      id: NotSet,
      email: Set(email),
      email_password: Set(email_password),
      usage_count: Set(0),
      created_at: Set(now),
    };

    Ok(credential.insert(self.db).await?)
  }

  pub async fn by_email(
    &self,
    email: &str,
  ) -> Result<Option<credential::Model>> {
    let credential = credential::Entity::find()
      .filter(credential::Column::Email.eq(email))
      .one(self.db)
      .await?;
    Ok(credential)
  }

  pub async fn all(&self) -> Result<Vec<credential::Model>> {
    let credentials = credential::Entity::find()
      .order_by_asc(credential::Column::Email)
      .all(self.db)
      .await?;
    Ok(credentials)
  }

  /// Replace the stored password. No ledger interaction.
  pub async fn set_password(
    &self,
    email: &str,
    email_password: String,
  ) -> Result<()> {
    let credential = self
      .by_email(email)
      .await?
      .ok_or(Error::CredentialNotFound)?;

    credential::ActiveModel {
      email_password: Set(email_password),
      ..credential.into()
    }
    .update(self.db)
    .await?;

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
    let stmt = schema.create_table_from_entity(credential::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  #[tokio::test]
  async fn create_and_lookup() {
    let db = setup_test_db().await;
    let sv = Credential::new(&db);

    let created = sv
      .create("shared@mail.com".to_string(), "hunter2".to_string())
      .await
      .unwrap();
    assert_eq!(created.usage_count, 0);

    let found = sv.by_email("shared@mail.com").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
  }

  #[tokio::test]
  async fn duplicate_email_is_rejected() {
    let db = setup_test_db().await;
    let sv = Credential::new(&db);

    sv.create("shared@mail.com".to_string(), "hunter2".to_string())
      .await
      .unwrap();

    let result =
      sv.create("shared@mail.com".to_string(), "other".to_string()).await;
    assert!(matches!(result, Err(Error::CredentialExists)));
  }

  #[tokio::test]
  async fn set_password_replaces_secret() {
    let db = setup_test_db().await;
    let sv = Credential::new(&db);

    sv.create("shared@mail.com".to_string(), "hunter2".to_string())
      .await
      .unwrap();

    sv.set_password("shared@mail.com", "correct-horse".to_string())
      .await
      .unwrap();

    let found = sv.by_email("shared@mail.com").await.unwrap().unwrap();
    assert_eq!(found.email_password, "correct-horse");
  }

  #[tokio::test]
  async fn set_password_unknown_email() {
    let db = setup_test_db().await;

    let result = Credential::new(&db)
      .set_password("nobody@mail.com", "pw".to_string())
      .await;
    assert!(matches!(result, Err(Error::CredentialNotFound)));
  }
}
