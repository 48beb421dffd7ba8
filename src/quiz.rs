//! Quiz availability for a unit: daily attempt cap and lock-out date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::progress::UnitProgress;

const DEFAULT_MAX_ATTEMPTS_PER_DAY: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizPolicy {
    pub max_attempts_per_day: u32,
}

impl Default for QuizPolicy {
    fn default() -> Self {
        Self {
            max_attempts_per_day: DEFAULT_MAX_ATTEMPTS_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAvailability {
    pub can_attempt: bool,
    pub attempts_remaining: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_until: Option<NaiveDate>,
}

pub fn quiz_availability(
    unit: Option<&UnitProgress>,
    today: NaiveDate,
    policy: &QuizPolicy,
) -> QuizAvailability {
    let Some(unit) = unit else {
        return QuizAvailability {
            can_attempt: policy.max_attempts_per_day > 0,
            attempts_remaining: policy.max_attempts_per_day,
            locked_until: None,
        };
    };

    let locked_until = unit.quiz_locked_until_date.filter(|date| *date > today);
    let attempts_remaining = policy
        .max_attempts_per_day
        .saturating_sub(unit.quiz_attempts_today);

    QuizAvailability {
        can_attempt: locked_until.is_none() && attempts_remaining > 0,
        attempts_remaining,
        locked_until,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_no_record_is_fully_available() {
        let result = quiz_availability(None, day(10), &QuizPolicy::default());
        assert!(result.can_attempt);
        assert_eq!(result.attempts_remaining, 3);
        assert_eq!(result.locked_until, None);
    }

    #[test]
    fn test_daily_cap_blocks() {
        let unit = UnitProgress {
            quiz_attempts_today: 3,
            ..Default::default()
        };
        let result = quiz_availability(Some(&unit), day(10), &QuizPolicy::default());
        assert!(!result.can_attempt);
        assert_eq!(result.attempts_remaining, 0);

        let unit = UnitProgress {
            quiz_attempts_today: 7,
            ..Default::default()
        };
        assert_eq!(
            quiz_availability(Some(&unit), day(10), &QuizPolicy::default()).attempts_remaining,
            0
        );
    }

    #[test]
    fn test_lock_date_in_future_blocks() {
        let unit = UnitProgress {
            quiz_locked_until_date: Some(day(11)),
            ..Default::default()
        };
        let result = quiz_availability(Some(&unit), day(10), &QuizPolicy::default());
        assert!(!result.can_attempt);
        assert_eq!(result.locked_until, Some(day(11)));
    }

    #[test]
    fn test_lock_expires_on_its_date() {
        let unit = UnitProgress {
            quiz_attempts_today: 1,
            quiz_locked_until_date: Some(day(10)),
            ..Default::default()
        };
        let result = quiz_availability(Some(&unit), day(10), &QuizPolicy::default());
        assert!(result.can_attempt);
        assert_eq!(result.attempts_remaining, 2);
        assert_eq!(result.locked_until, None);
    }
}
