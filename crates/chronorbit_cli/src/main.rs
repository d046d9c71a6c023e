//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `chronorbit_core` linkage without the Flutter runtime.
//! - Print a deterministic demo dial for quick local sanity checks.

use chrono::NaiveDate;
use chronorbit_core::{
    format_timestamp, BackendResult, PlannerConfig, PlannerService, ScheduleBackend,
    ScheduleInsert,
};

/// Backend that accepts every record without storing it.
struct DiscardBackend;

impl ScheduleBackend for DiscardBackend {
    fn insert(&self, _record: &ScheduleInsert) -> BackendResult<()> {
        Ok(())
    }
}

fn main() {
    println!("chronorbit_core ping={}", chronorbit_core::ping());
    println!("chronorbit_core version={}", chronorbit_core::core_version());

    let Some(day) = NaiveDate::from_ymd_opt(2025, 6, 15) else {
        return;
    };
    let demo = [
        ("Sleep", (0, 0), (7, 0)),
        ("Work", (9, 0), (11, 0)),
        ("Lunch", (11, 0), (12, 0)),
        ("Study", (20, 0), (22, 30)),
    ];

    let mut planner = PlannerService::new(DiscardBackend, PlannerConfig::default());
    for (title, (start_h, start_m), (end_h, end_m)) in demo {
        let (Some(start), Some(end)) = (
            day.and_hms_opt(start_h, start_m, 0),
            day.and_hms_opt(end_h, end_m, 0),
        ) else {
            continue;
        };
        if let Err(err) = planner.add_schedule(title, start, end) {
            println!("demo add failed: {err}");
        }
    }

    let Some(now) = day.and_hms_opt(11, 0, 0) else {
        return;
    };
    let snapshot = planner.dial_snapshot(now);
    println!("now={} clock={}", format_timestamp(now), snapshot.clock_label);
    for slice in &snapshot.slices {
        println!(
            "slice index={} title={} start_angle={:.2} end_angle={:.2} color_key={:.3} active={} layer={}",
            slice.index,
            slice.title,
            slice.start_angle,
            slice.end_angle,
            slice.color_key,
            slice.is_active,
            slice.overlap_depth
        );
    }
    match (&snapshot.active, snapshot.remaining_minutes) {
        (Some(active), Some(remaining)) => {
            println!("active={} remaining_minutes={remaining}", active.title)
        }
        _ => println!("active=none"),
    }
}
