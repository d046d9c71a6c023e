//! First-wins active schedule lookup.

use crate::model::schedule::Schedule;
use chrono::NaiveDateTime;

/// Returns the first schedule, in store order, whose `[start, end]` contains `now`.
pub fn find_active(schedules: &[Schedule], now: NaiveDateTime) -> Option<&Schedule> {
    schedules.iter().find(|schedule| schedule.contains(now))
}

/// Returns `floor((schedule.end - now) / 1 minute)`.
///
/// Containment is not checked: an instant past `end` yields a negative
/// value. Callers guard with [`find_active`].
pub fn remaining_minutes(schedule: &Schedule, now: NaiveDateTime) -> i64 {
    (schedule.end - now).num_milliseconds().div_euclid(60_000)
}
