//! Admin service - operator accounts with argon2-hashed passwords
//!
//! Passwords are verified here, server side; identity never comes from
//! anything the client stores.

use argon2::{
  Argon2, PasswordHasher, PasswordVerifier,
  password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};

use crate::{entity::admin, prelude::*};

pub struct Admin<'a> {
  db: &'a DatabaseConnection,
}

fn hash_password(password: &str) -> Result<String> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|err| Error::Internal(format!("password hash failed: {err}")))
}

impl<'a> Admin<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  pub async fn register(
    &self,
    email: String,
    username: String,
    password: &str,
  ) -> Result<admin::Model> {
    let existing = admin::Entity::find()
      .filter(admin::Column::Email.eq(&email))
      .one(self.db)
      .await?;

    if existing.is_some() {
      return Err(Error::AdminExists);
    }

    let now = Utc::now().naive_utc();
    let admin = admin::ActiveModel {
      id: NotSet,
      email: Set(email),
      username: Set(username),
      password_hash: Set(hash_password(password)?),
      created_at: Set(now),
    };

    Ok(admin.insert(self.db).await?)
  }

  /// Check a login attempt. Unknown email and wrong password collapse
  /// into the same error so the response does not leak which one it was.
  pub async fn verify(
    &self,
    email: &str,
    password: &str,
  ) -> Result<admin::Model> {
    let admin = admin::Entity::find()
      .filter(admin::Column::Email.eq(email))
      .one(self.db)
      .await?
      .ok_or(Error::InvalidCredentials)?;

    let hash = PasswordHash::new(&admin.password_hash)
      .map_err(|err| Error::Internal(format!("stored hash invalid: {err}")))?;

    Argon2::default()
      .verify_password(password.as_bytes(), &hash)
      .map_err(|_| Error::InvalidCredentials)?;

    Ok(admin)
  }

  pub async fn by_id(&self, id: i64) -> Result<Option<admin::Model>> {
    let admin = admin::Entity::find_by_id(id).one(self.db).await?;
    Ok(admin)
  }
}

#[cfg(test)]
mod tests {
  use sea_orm::{DbBackend, Schema};

  use super::*;

  async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();

    let schema = Schema::new(DbBackend::Sqlite);
    let stmt = schema.create_table_from_entity(admin::Entity);
    db.execute(db.get_database_backend().build(&stmt)).await.unwrap();

    db
  }

  #[tokio::test]
  async fn register_and_verify() {
    let db = setup_test_db().await;
    let sv = Admin::new(&db);

    let admin = sv
      .register("root@mail.com".to_string(), "root".to_string(), "s3cret!")
      .await
      .unwrap();
    assert_ne!(admin.password_hash, "s3cret!");

    let verified = sv.verify("root@mail.com", "s3cret!").await.unwrap();
    assert_eq!(verified.id, admin.id);
  }

  #[tokio::test]
  async fn wrong_password_is_rejected() {
    let db = setup_test_db().await;
    let sv = Admin::new(&db);

    sv.register("root@mail.com".to_string(), "root".to_string(), "s3cret!")
      .await
      .unwrap();

    let result = sv.verify("root@mail.com", "not-it").await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));
  }

  #[tokio::test]
  async fn unknown_email_is_rejected() {
    let db = setup_test_db().await;

    let result = Admin::new(&db).verify("nobody@mail.com", "s3cret!").await;
    assert!(matches!(result, Err(Error::InvalidCredentials)));
  }

  #[tokio::test]
  async fn duplicate_email_is_rejected() {
    let db = setup_test_db().await;
    let sv = Admin::new(&db);

    sv.register("root@mail.com".to_string(), "root".to_string(), "s3cret!")
      .await
      .unwrap();

    let result = sv
      .register("root@mail.com".to_string(), "other".to_string(), "pw")
      .await;
    assert!(matches!(result, Err(Error::AdminExists)));
  }
}
