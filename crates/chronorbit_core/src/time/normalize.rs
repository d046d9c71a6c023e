//! Day/time-of-day combination and minutes-of-day reduction.
//!
//! # Invariants
//! - `combine*` never fails: a combination that cannot be built falls back to
//!   the day reference unchanged.
//! - `minutes_of_day` always returns a value in `[0, MINUTES_PER_DAY)`.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use log::warn;

/// Minutes on the 24-hour dial.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Fixed textual pattern (`yyyy-MM-dd HH:mm:ss`) handed to collaborators.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const CLOCK_LABEL_FORMAT: &str = "%H:%M";

/// Combines the calendar day of `date` with the time of day of `time_of_day`.
///
/// Year/month/day come from `date`, hour/minute/second from `time_of_day`.
/// Sub-second precision is dropped. Falls back to `date` when the components
/// cannot form a valid instant.
pub fn combine(date: NaiveDateTime, time_of_day: NaiveDateTime) -> NaiveDateTime {
    match combine_components(&date, &time_of_day) {
        Some(combined) => combined,
        None => {
            warn!("event=normalize_fallback module=time status=degraded mode=naive");
            date
        }
    }
}

/// Zone-aware variant of [`combine`].
///
/// Wall-clock components are read in each value's own zone, combined, and
/// resolved in `date`'s zone. A wall-clock time that does not exist there
/// (DST gap) degrades to `date` unchanged; ambiguous times resolve to the
/// earliest match.
pub fn combine_in<Tz: TimeZone>(date: &DateTime<Tz>, time_of_day: &DateTime<Tz>) -> DateTime<Tz> {
    let day = date.naive_local();
    let time = time_of_day.naive_local();

    match combine_components(&day, &time) {
        Some(naive) => resolve_or_degrade(date, date.timezone().from_local_datetime(&naive)),
        None => resolve_or_degrade(date, LocalResult::None),
    }
}

/// Returns `hour * 60 + minute`, discarding date, seconds and below.
pub fn minutes_of_day<T: Timelike>(instant: &T) -> u32 {
    instant.hour() * 60 + instant.minute()
}

/// Formats `instant` with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(instant: NaiveDateTime) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Formats `instant` as a short `HH:MM` clock label.
pub fn clock_label(instant: NaiveDateTime) -> String {
    instant.format(CLOCK_LABEL_FORMAT).to_string()
}

/// Picks the earliest zoned match, or `date` itself when none exists.
fn resolve_or_degrade<Tz: TimeZone>(
    date: &DateTime<Tz>,
    resolved: LocalResult<DateTime<Tz>>,
) -> DateTime<Tz> {
    match resolved.earliest() {
        Some(combined) => combined,
        None => {
            warn!("event=normalize_fallback module=time status=degraded mode=zoned");
            date.clone()
        }
    }
}

fn combine_components<D: Datelike, T: Timelike>(date: &D, time_of_day: &T) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), date.day()).and_then(|day| {
        day.and_hms_opt(time_of_day.hour(), time_of_day.minute(), time_of_day.second())
    })
}

#[cfg(test)]
mod tests {
    use super::{
        clock_label, combine_components, minutes_of_day, resolve_or_degrade, MINUTES_PER_DAY,
    };
    use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone};

    #[test]
    fn combine_components_takes_day_and_time_from_each_side() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let time = NaiveTime::from_hms_opt(8, 30, 15).unwrap();

        let combined = combine_components(&day, &time).unwrap();
        assert_eq!(combined.date(), day);
        assert_eq!(combined.time(), time);
    }

    #[test]
    fn minutes_of_day_stays_below_day_length() {
        let last = NaiveTime::from_hms_opt(23, 59, 59).unwrap();
        assert_eq!(minutes_of_day(&last), MINUTES_PER_DAY - 1);
        let first = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(minutes_of_day(&first), 0);
    }

    #[test]
    fn clock_label_is_hours_and_minutes() {
        let value = NaiveDate::from_ymd_opt(2025, 6, 15)
            .unwrap()
            .and_hms_opt(7, 5, 42)
            .unwrap();
        assert_eq!(clock_label(value), "07:05");
    }

    #[test]
    fn missing_local_time_degrades_to_day_reference() {
        let zone = FixedOffset::east_opt(3600).unwrap();
        let day = zone.with_ymd_and_hms(2025, 3, 30, 0, 0, 0).unwrap();

        assert_eq!(resolve_or_degrade(&day, LocalResult::None), day);
    }

    #[test]
    fn ambiguous_local_time_resolves_to_earliest_match() {
        let day = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 10, 26, 0, 0, 0)
            .unwrap();
        let summer = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 10, 26, 2, 30, 0)
            .unwrap();
        let winter = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2025, 10, 26, 2, 30, 0)
            .unwrap();

        let resolved = resolve_or_degrade(&day, LocalResult::Ambiguous(summer, winter));
        assert_eq!(resolved, summer);
        assert!(resolved < winter);
    }
}
