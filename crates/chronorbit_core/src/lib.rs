//! Core schedule time-layout engine for ChronOrbit.
//! This crate is the single source of truth for dial and schedule invariants.

pub mod backend;
pub mod config;
pub mod db;
pub mod layout;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod service;
pub mod store;
pub mod time;

pub use backend::calendar::{CalendarError, CalendarEventRequest, CalendarSink, ReminderRequest};
pub use backend::schedule_backend::{BackendError, BackendResult, ScheduleBackend, ScheduleInsert};
pub use backend::sqlite::SqliteScheduleBackend;
pub use config::PlannerConfig;
pub use layout::color::{color_key, SliceColor};
pub use layout::dial::{hit_test, layout, minutes_to_angle, LayoutSlice};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::schedule::{normalize_title, Schedule, ScheduleId};
pub use resolve::active::{find_active, remaining_minutes};
pub use service::planner_service::{
    AddScheduleOutcome, DialSnapshot, PersistenceStatus, PlannerError, PlannerResult,
    PlannerService,
};
pub use store::schedule_store::ScheduleStore;
pub use time::normalize::{
    clock_label, combine, combine_in, format_timestamp, minutes_of_day, MINUTES_PER_DAY,
    TIMESTAMP_FORMAT,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
