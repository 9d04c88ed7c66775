//! Member service - subscription records plus the shared-credential ledger
//!
//! Attaching a member to a stored credential bumps that credential's
//! `usage_count`; detaching (deleting the member) drops it again. Both
//! record and counter are written in one transaction, record first.

use serde::Serialize;

use crate::{
  entity::{Plan, USAGE_CAP, credential, member},
  lifecycle::{self, Status},
  prelude::*,
};

pub struct Member<'a> {
  db: &'a DatabaseConnection,
}

/// Creation input. Dates are mandatory here; only legacy rows may lack
/// them in storage.
#[derive(Debug, Clone)]
pub struct NewMember {
  pub name: String,
  pub phone: String,
  pub plan: Plan,
  pub credential_email: Option<String>,
  pub starts_on: Date,
  pub ends_on: Date,
}

#[derive(Debug, Clone)]
pub struct UpdateMember {
  pub name: String,
  pub phone: String,
  pub starts_on: Date,
  pub ends_on: Date,
}

/// A stored record together with its derived fields. Day counts and
/// status come from the dates and the clock at fetch time, never from
/// storage.
#[derive(Debug, Serialize)]
pub struct MemberView {
  #[serde(flatten)]
  pub record: member::Model,
  pub total_days: i64,
  pub used_days: i64,
  pub status: Status,
}

impl MemberView {
  fn derive(record: member::Model, now: DateTime) -> Self {
    let total_days = lifecycle::total_days(record.starts_on, record.ends_on);
    let used_days = lifecycle::used_days(record.starts_on, now);
    let status = lifecycle::status(used_days, total_days);

    Self { record, total_days, used_days, status }
  }
}

#[derive(Debug, Serialize)]
pub struct MemberStats {
  pub total: u64,
  pub active: u64,
  pub expired: u64,
}

impl<'a> Member<'a> {
  pub fn new(db: &'a DatabaseConnection) -> Self {
    Self { db }
  }

  /// Create a member, attaching it to its stored credential if one is
  /// named. Rejects unknown credentials and credentials already at the
  /// usage cap; nothing is written in either case.
  pub async fn create(&self, new: NewMember) -> Result<member::Model> {
    let txn = self.db.begin().await?;

    let credential = match &new.credential_email {
      Some(email) => {
        let credential = credential::Entity::find()
          .filter(credential::Column::Email.eq(email))
          .one(&txn)
          .await?
          .ok_or(Error::CredentialNotFound)?;

        if credential.usage_count >= USAGE_CAP {
          return Err(Error::CapacityExceeded);
        }

        Some(credential)
      }
      None => None,
    };

    let now = Utc::now().naive_utc();
    let member = member::ActiveModel {
      id: NotSet,
      name: Set(new.name),
      phone: Set(new.phone),
      plan: Set(new.plan),
      credential_email: Set(new.credential_email),
      starts_on: Set(Some(new.starts_on)),
      ends_on: Set(Some(new.ends_on)),
      created_at: Set(now),
    }
    .insert(&txn)
    .await?;

    // record first, then the counter; a failed counter write rolls the
    // record back with it
    if let Some(credential) = credential {
      credential::ActiveModel {
        usage_count: Set(credential.usage_count + 1),
        ..credential.into()
      }
      .update(&txn)
      .await?;
    }

    txn.commit().await?;
    Ok(member)
  }

  /// Delete a member and release its credential slot. The counter never
  /// drops below zero, even when it already disagrees with the rows.
  pub async fn delete(&self, id: i64) -> Result<()> {
    let txn = self.db.begin().await?;

    let member = member::Entity::find_by_id(id)
      .one(&txn)
      .await?
      .ok_or(Error::MemberNotFound)?;

    let email = member.credential_email.clone();
    member::Entity::delete_by_id(member.id).exec(&txn).await?;

    if let Some(email) = email {
      let credential = credential::Entity::find()
        .filter(credential::Column::Email.eq(&email))
        .one(&txn)
        .await?;

      if let Some(credential) = credential
        && credential.usage_count > 0
      {
        credential::ActiveModel {
          usage_count: Set(credential.usage_count - 1),
          ..credential.into()
        }
        .update(&txn)
        .await?;
      }
    }

    txn.commit().await?;
    Ok(())
  }

  /// Edit name, phone and the subscription window. The credential
  /// association is fixed at creation; derived fields follow the new
  /// dates on the next read.
  pub async fn update(
    &self,
    id: i64,
    patch: UpdateMember,
  ) -> Result<member::Model> {
    let member = member::Entity::find_by_id(id)
      .one(self.db)
      .await?
      .ok_or(Error::MemberNotFound)?;

    let member = member::ActiveModel {
      name: Set(patch.name),
      phone: Set(patch.phone),
      starts_on: Set(Some(patch.starts_on)),
      ends_on: Set(Some(patch.ends_on)),
      ..member.into()
    }
    .update(self.db)
    .await?;

    Ok(member)
  }

  pub async fn by_id(&self, id: i64) -> Result<Option<member::Model>> {
    let member = member::Entity::find_by_id(id).one(self.db).await?;
    Ok(member)
  }

  pub async fn all(&self) -> Result<Vec<MemberView>> {
    let now = Utc::now().naive_utc();
    let members = member::Entity::find()
      .order_by_asc(member::Column::Id)
      .all(self.db)
      .await?;

    Ok(members.into_iter().map(|record| MemberView::derive(record, now)).collect())
  }

  pub async fn stats(&self) -> Result<MemberStats> {
    let views = self.all().await?;

    let total = views.len() as u64;
    let active =
      views.iter().filter(|view| view.status == Status::Active).count() as u64;

    Ok(MemberStats { total, active, expired: total - active })
  }
}
