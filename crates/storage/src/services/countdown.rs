use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Time left until the challenge starts, split into whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub const ZERO: Self = Self {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Remaining time from `now` until `target`, all zero once `target` has passed.
    /// Sub-second remainders are truncated.
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance = (target - now).num_seconds();
        if distance <= 0 {
            return Self::ZERO;
        }

        Self {
            days: (distance / SECONDS_PER_DAY) as u64,
            hours: ((distance % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u64,
            minutes: ((distance % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u64,
            seconds: (distance % SECONDS_PER_MINUTE) as u64,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
