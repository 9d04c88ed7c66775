//! Subscription lifecycle math - day counts and status derived from dates
//!
//! Derived values are never stored: every read recomputes them from the
//! subscription dates and the caller's clock.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::prelude::{Date, DateTime};

const SECS_PER_DAY: i64 = 24 * 60 * 60;

#[derive(
  Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Active,
  Expired,
}

/// Whole days covered by the subscription window, absolute difference.
///
/// A missing date yields 0 rather than an error; a reversed range yields
/// the same magnitude as the forward one.
pub fn total_days(start: Option<Date>, end: Option<Date>) -> i64 {
  let (Some(start), Some(end)) = (start, end) else {
    return 0;
  };

  (end - start).num_days().abs()
}

/// Whole days elapsed since the subscription started, rounded up.
///
/// Clamped at 0 so a start date in the future never counts negative.
pub fn used_days(start: Option<Date>, now: DateTime) -> i64 {
  let Some(start) = start else {
    return 0;
  };

  let elapsed = (now - start.and_time(NaiveTime::MIN)).num_seconds();
  if elapsed <= 0 { 0 } else { (elapsed as u64).div_ceil(SECS_PER_DAY as u64) as i64 }
}

/// `used == total` still counts as active; equality favors the subscriber.
pub fn status(used: i64, total: i64) -> Status {
  if used > total { Status::Expired } else { Status::Active }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd_opt(y, m, d).unwrap()
  }

  fn midnight(y: i32, m: u32, d: u32) -> DateTime {
    date(y, m, d).and_time(NaiveTime::MIN)
  }

  #[test]
  fn total_days_for_ten_day_window() {
    let total = total_days(Some(date(2024, 1, 1)), Some(date(2024, 1, 11)));
    assert_eq!(total, 10);
  }

  #[test]
  fn total_days_is_symmetric() {
    let forward = total_days(Some(date(2024, 1, 1)), Some(date(2024, 1, 11)));
    let reversed = total_days(Some(date(2024, 1, 11)), Some(date(2024, 1, 1)));
    assert_eq!(forward, reversed);
  }

  #[test]
  fn total_days_without_dates_is_zero() {
    assert_eq!(total_days(None, Some(date(2024, 1, 11))), 0);
    assert_eq!(total_days(Some(date(2024, 1, 1)), None), 0);
    assert_eq!(total_days(None, None), 0);
  }

  #[test]
  fn used_days_mid_subscription() {
    let used = used_days(Some(date(2024, 1, 1)), midnight(2024, 1, 5));
    assert_eq!(used, 4);
  }

  #[test]
  fn used_days_rounds_partial_days_up() {
    let noon = date(2024, 1, 1).and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(used_days(Some(date(2024, 1, 1)), noon), 1);
  }

  #[test]
  fn used_days_clamps_future_start() {
    let used = used_days(Some(date(2024, 2, 1)), midnight(2024, 1, 5));
    assert_eq!(used, 0);
  }

  #[test]
  fn used_days_without_start_is_zero() {
    assert_eq!(used_days(None, midnight(2024, 1, 5)), 0);
  }

  #[test]
  fn status_boundary_favors_subscriber() {
    assert_eq!(status(10, 10), Status::Active);
    assert_eq!(status(11, 10), Status::Expired);
    assert_eq!(status(0, 0), Status::Active);
  }

  #[test]
  fn ten_day_subscription_active_on_day_five() {
    let start = Some(date(2024, 1, 1));
    let end = Some(date(2024, 1, 11));
    let now = midnight(2024, 1, 5);

    let total = total_days(start, end);
    let used = used_days(start, now);

    assert_eq!(total, 10);
    assert_eq!(used, 4);
    assert_eq!(status(used, total), Status::Active);
  }

  #[test]
  fn ten_day_subscription_expired_on_day_twenty() {
    let start = Some(date(2024, 1, 1));
    let end = Some(date(2024, 1, 11));
    let now = midnight(2024, 1, 20);

    let used = used_days(start, now);

    assert_eq!(used, 19);
    assert_eq!(status(used, total_days(start, end)), Status::Expired);
  }
}
