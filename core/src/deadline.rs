//! Construction deadline proximity.
//!
//! The deadline is the client's start date plus `construction_days` calendar
//! days. A building client is flagged once five or fewer days remain, and
//! again once the deadline has passed.

use chrono::{DateTime, Days, Utc};

use crate::models::{Client, ClientCategory};

/// Remaining days at or below which a deadline counts as near.
pub const DEADLINE_WARNING_DAYS: i64 = 5;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Deadline for a client, `None` if it falls outside the representable range.
pub fn deadline_date(client: &Client, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    client
        .start_date(now)
        .checked_add_days(Days::new(u64::from(client.construction_days)))
}

/// Whole days until the deadline, rounded up. Negative once passed.
pub fn days_left(deadline: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (deadline - now).num_milliseconds();
    // ceil for signed division
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Deadline flags for one client card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeadlineStatus {
    /// Five days or fewer remain (also true once passed)
    pub near: bool,
    /// Current time is after the deadline
    pub passed: bool,
}

impl DeadlineStatus {
    /// Evaluate the flags at `now`. Only building clients are ever flagged.
    pub fn evaluate(client: &Client, category: ClientCategory, now: DateTime<Utc>) -> Self {
        if !category.tracks_deadline() {
            return Self::default();
        }

        match deadline_date(client, now) {
            Some(deadline) => Self {
                near: days_left(deadline, now) <= DEADLINE_WARNING_DAYS,
                passed: now > deadline,
            },
            None => Self::default(),
        }
    }

    /// Whether the client name should be highlighted.
    pub fn is_alert(&self) -> bool {
        self.near || self.passed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    fn client(construction_days: u32, created_days_ago: Option<i64>) -> Client {
        Client {
            id: "c-1".to_string(),
            first_name: "Тимур".to_string(),
            last_name: "Ахметов".to_string(),
            phone: String::new(),
            object_name: None,
            total_amount: 0.0,
            construction_days,
            created_at: created_days_ago.map(|d| now() - Duration::days(d)),
            is_icons_visible: false,
        }
    }

    #[test]
    fn test_warning_when_few_days_left() {
        let status = DeadlineStatus::evaluate(&client(10, Some(6)), ClientCategory::Building, now());
        assert!(status.near);
        assert!(!status.passed);
        assert!(status.is_alert());
    }

    #[test]
    fn test_passed_after_deadline() {
        let status = DeadlineStatus::evaluate(&client(10, Some(11)), ClientCategory::Building, now());
        assert!(status.passed);
        assert!(status.near);
    }

    #[test]
    fn test_no_flags_with_time_to_spare() {
        let status = DeadlineStatus::evaluate(&client(30, Some(2)), ClientCategory::Building, now());
        assert_eq!(status, DeadlineStatus::default());
        assert!(!status.is_alert());
    }

    #[test]
    fn test_other_categories_never_flagged() {
        for category in [ClientCategory::Deposit, ClientCategory::Built] {
            let overdue = DeadlineStatus::evaluate(&client(10, Some(40)), category, now());
            assert_eq!(overdue, DeadlineStatus::default());

            let near = DeadlineStatus::evaluate(&client(10, Some(6)), category, now());
            assert_eq!(near, DeadlineStatus::default());
        }
    }

    #[test]
    fn test_boundary_five_days() {
        // Exactly five days left counts as near, six does not
        let five = DeadlineStatus::evaluate(&client(10, Some(5)), ClientCategory::Building, now());
        assert!(five.near);

        let six = DeadlineStatus::evaluate(&client(10, Some(4)), ClientCategory::Building, now());
        assert!(!six.near);
    }

    #[test]
    fn test_missing_created_at_uses_now() {
        let c = client(3, None);
        assert_eq!(deadline_date(&c, now()), Some(now() + Duration::days(3)));

        let status = DeadlineStatus::evaluate(&c, ClientCategory::Building, now());
        assert!(status.near);
        assert!(!status.passed);

        // Zero-day contract created "now" is due now but not yet passed
        let status = DeadlineStatus::evaluate(&client(0, None), ClientCategory::Building, now());
        assert!(status.near);
        assert!(!status.passed);
    }

    #[test]
    fn test_days_left_rounds_up() {
        let deadline = now() + Duration::hours(25);
        assert_eq!(days_left(deadline, now()), 2);

        let deadline = now() - Duration::hours(25);
        assert_eq!(days_left(deadline, now()), -1);

        assert_eq!(days_left(now(), now()), 0);
    }

    #[test]
    fn test_overflowing_deadline_is_not_flagged() {
        let mut c = client(u32::MAX, None);
        c.created_at = Some(DateTime::<Utc>::MAX_UTC - Duration::days(1));
        assert_eq!(deadline_date(&c, now()), None);
        assert_eq!(
            DeadlineStatus::evaluate(&c, ClientCategory::Building, now()),
            DeadlineStatus::default()
        );
    }
}
