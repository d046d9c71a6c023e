//! Schedule-to-angle mapping for the 24-hour dial.

use crate::layout::color::{color_key, SliceColor};
use crate::model::schedule::{Schedule, ScheduleId};
use crate::time::normalize::{minutes_of_day, MINUTES_PER_DAY};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Degrees in one full turn of the dial.
pub const DEGREES_PER_TURN: f64 = 360.0;

/// Offset from a 12 o'clock zero to a 3 o'clock zero (screen convention).
const SCREEN_ROTATION_DEGREES: f64 = -90.0;

/// Derived render-pass view of one schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSlice {
    pub schedule_id: ScheduleId,
    pub title: String,
    /// Ordinal position in store order.
    pub index: usize,
    pub start_minutes: u32,
    pub end_minutes: u32,
    /// Degrees clockwise from 12 o'clock, in `[0, 360)`.
    pub start_angle: f64,
    /// Degrees clockwise from 12 o'clock, in `[0, 360)`.
    pub end_angle: f64,
    pub color_key: f64,
    pub color: SliceColor,
    /// `true` when the query instant lies in `[start, end]`.
    pub is_active: bool,
    /// `true` when `end_minutes < start_minutes`. Angles are left as-is.
    pub crosses_midnight: bool,
    /// Number of earlier slices whose arcs intersect this one.
    pub overlap_depth: usize,
}

impl LayoutSlice {
    /// Clockwise sweep from `start_angle` to `end_angle`, in `[0, 360)`.
    pub fn sweep_degrees(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(DEGREES_PER_TURN)
    }

    /// Angles rotated for renderers whose 0° sits at 3 o'clock.
    pub fn screen_angles(&self) -> (f64, f64) {
        (
            self.start_angle + SCREEN_ROTATION_DEGREES,
            self.end_angle + SCREEN_ROTATION_DEGREES,
        )
    }

    /// Returns whether the clockwise arc of this slice contains `angle`.
    ///
    /// Zero-width slices contain nothing.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let offset = (angle - self.start_angle).rem_euclid(DEGREES_PER_TURN);
        offset < self.sweep_degrees()
    }

    fn arc_segments(&self) -> Vec<(u32, u32)> {
        let sweep = (i64::from(self.end_minutes) - i64::from(self.start_minutes))
            .rem_euclid(i64::from(MINUTES_PER_DAY)) as u32;
        let end = self.start_minutes + sweep;
        if sweep == 0 {
            Vec::new()
        } else if end <= MINUTES_PER_DAY {
            vec![(self.start_minutes, end)]
        } else {
            vec![
                (self.start_minutes, MINUTES_PER_DAY),
                (0, end - MINUTES_PER_DAY),
            ]
        }
    }

    fn overlaps(&self, other: &LayoutSlice) -> bool {
        let others = other.arc_segments();
        self.arc_segments().iter().any(|&(start, end)| {
            others
                .iter()
                .any(|&(other_start, other_end)| start < other_end && other_start < end)
        })
    }
}

/// Converts minutes-of-day into dial degrees.
pub fn minutes_to_angle(minutes: u32) -> f64 {
    f64::from(minutes) * DEGREES_PER_TURN / f64::from(MINUTES_PER_DAY)
}

/// Lays out `schedules` on the dial against query instant `now`.
///
/// Returns one slice per schedule in input order; an empty input yields an
/// empty layout.
pub fn layout(schedules: &[Schedule], now: NaiveDateTime) -> Vec<LayoutSlice> {
    let count = schedules.len();
    let mut slices: Vec<LayoutSlice> = Vec::with_capacity(count);

    for (index, schedule) in schedules.iter().enumerate() {
        let start_minutes = minutes_of_day(&schedule.start);
        let end_minutes = minutes_of_day(&schedule.end);
        let key = color_key(index, count);

        let mut slice = LayoutSlice {
            schedule_id: schedule.id,
            title: schedule.title.clone(),
            index,
            start_minutes,
            end_minutes,
            start_angle: minutes_to_angle(start_minutes),
            end_angle: minutes_to_angle(end_minutes),
            color_key: key,
            color: SliceColor::for_key(key),
            is_active: schedule.contains(now),
            crosses_midnight: end_minutes < start_minutes,
            overlap_depth: 0,
        };
        slice.overlap_depth = slices.iter().filter(|earlier| earlier.overlaps(&slice)).count();
        slices.push(slice);
    }

    slices
}

/// Returns the topmost slice whose arc contains `angle`.
///
/// Later slices are drawn above earlier ones, so the search runs in reverse
/// store order. `angle` is normalized into `[0, 360)` first.
pub fn hit_test(slices: &[LayoutSlice], angle: f64) -> Option<&LayoutSlice> {
    let normalized = angle.rem_euclid(DEGREES_PER_TURN);
    slices
        .iter()
        .rev()
        .find(|slice| slice.contains_angle(normalized))
}

#[cfg(test)]
mod tests {
    use super::{minutes_to_angle, DEGREES_PER_TURN};

    #[test]
    fn quarter_days_map_to_right_angles() {
        assert_eq!(minutes_to_angle(0), 0.0);
        assert_eq!(minutes_to_angle(360), 90.0);
        assert_eq!(minutes_to_angle(720), 180.0);
        assert_eq!(minutes_to_angle(1080), 270.0);
        assert!(minutes_to_angle(1439) < DEGREES_PER_TURN);
    }
}
