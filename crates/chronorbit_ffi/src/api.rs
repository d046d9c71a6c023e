//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose planner operations to Dart via FRB.
//! - Own the per-process planner session and its collaborators.
//! - Queue calendar/reminder requests for the host, which owns the OS
//!   calendar permission and performs the actual writes.
//! - Convert host epoch-millisecond values into local wall-clock instants.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Timestamps returned to the host use `yyyy-MM-dd HH:mm:ss`.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use chronorbit_core::{
    combine_in, core_version as core_version_inner, format_timestamp,
    init_logging as init_logging_inner, ping as ping_inner, CalendarError, CalendarEventRequest,
    CalendarSink, LayoutSlice, PlannerConfig, PlannerService, ReminderRequest, Schedule,
    ScheduleId, SqliteScheduleBackend,
};
use log::warn;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

const PLANNER_DB_FILE_NAME: &str = "chronorbit_schedules.sqlite3";
static PLANNER_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static PLANNER_SESSION: OnceLock<Mutex<PlannerService<SqliteScheduleBackend>>> = OnceLock::new();
static PENDING_CALENDAR_REQUESTS: Mutex<Vec<CalendarRequestItem>> = Mutex::new(Vec::new());

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Seconds between host refreshes of the dial's "now".
#[flutter_rust_bridge::frb(sync)]
pub fn planner_refresh_interval_secs() -> u64 {
    PlannerConfig::default().refresh_interval_secs
}

/// One schedule as shown in detail and list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItem {
    pub schedule_id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

/// One dial slice for the chart painter.
#[derive(Debug, Clone, PartialEq)]
pub struct DialSliceItem {
    pub schedule_id: String,
    pub title: String,
    /// Degrees clockwise from 12 o'clock.
    pub start_angle: f64,
    pub end_angle: f64,
    pub sweep_degrees: f64,
    /// Packed `0xRRGGBB` fill color.
    pub color_rgb: u32,
    pub is_active: bool,
    pub crosses_midnight: bool,
    pub layer: u32,
}

/// Render-pass payload for the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct DialResponse {
    pub ok: bool,
    pub slices: Vec<DialSliceItem>,
    pub active: Option<ScheduleItem>,
    pub remaining_minutes: Option<i64>,
    pub clock_label: String,
    pub message: String,
}

/// Result envelope for add/select actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleActionResponse {
    /// Whether the core accepted the request.
    pub ok: bool,
    /// Whether the backend confirmed the write. Always `false` when `!ok`.
    pub persisted: bool,
    pub item: Option<ScheduleItem>,
    /// Confirmation text or the failure description, verbatim.
    pub message: String,
}

/// Session schedules in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleListResponse {
    /// `false` when the session could not be read; `items` is then empty.
    pub ok: bool,
    pub items: Vec<ScheduleItem>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarRequestKind {
    Event,
    Reminder,
}

/// One calendar write the host performs with its own permissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequestItem {
    pub kind: CalendarRequestKind,
    pub title: String,
    pub start_time: String,
    /// Empty for reminders.
    pub end_time: String,
    /// Alarm lead before `start_time`; `0` for reminders.
    pub alarm_lead_minutes: i64,
}

/// Calendar requests queued since the last take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRequestListResponse {
    pub ok: bool,
    pub items: Vec<CalendarRequestItem>,
    pub message: String,
}

impl ScheduleActionResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            persisted: false,
            item: None,
            message: message.into(),
        }
    }
}

/// Records a schedule for `day_epoch_ms` between two picker times.
///
/// # FFI contract
/// - Only the calendar day of `day_epoch_ms` and the time of day of the
///   picker values are used.
/// - The schedule stays in the session even when the backend write fails;
///   `persisted=false` plus the backend message report that case.
/// - The matching calendar event and reminder are queued for the host, see
///   [`planner_take_calendar_requests`].
#[flutter_rust_bridge::frb(sync)]
pub fn planner_add_schedule(
    title: String,
    day_epoch_ms: i64,
    start_epoch_ms: i64,
    end_epoch_ms: i64,
) -> ScheduleActionResponse {
    let (Some(day), Some(start), Some(end)) = (
        local_from_epoch_ms(day_epoch_ms),
        local_from_epoch_ms(start_epoch_ms),
        local_from_epoch_ms(end_epoch_ms),
    ) else {
        return ScheduleActionResponse::failure("planner_add_schedule failed: invalid timestamp");
    };
    let start = combine_in(&day, &start).naive_local();
    let end = combine_in(&day, &end).naive_local();

    let mut planner = match lock_session() {
        Ok(planner) => planner,
        Err(err) => return ScheduleActionResponse::failure(err),
    };
    match planner.add_schedule(title.as_str(), start, end) {
        Ok(outcome) => ScheduleActionResponse {
            ok: true,
            persisted: outcome.persistence.is_confirmed(),
            item: Some(to_schedule_item(&outcome.schedule)),
            message: outcome.persistence.message().to_string(),
        },
        Err(err) => ScheduleActionResponse::failure(format!("planner_add_schedule failed: {err}")),
    }
}

/// Lists session schedules in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_list() -> ScheduleListResponse {
    match lock_session() {
        Ok(planner) => ScheduleListResponse {
            ok: true,
            items: planner.schedules().iter().map(to_schedule_item).collect(),
            message: String::new(),
        },
        Err(err) => ScheduleListResponse {
            ok: false,
            items: Vec::new(),
            message: err,
        },
    }
}

/// Drains the calendar event/reminder requests queued by added schedules.
///
/// # FFI contract
/// - The host writes each item to the OS calendar if access was granted and
///   drops it otherwise. Nothing is retried on the Rust side.
/// - Each queued item is returned exactly once.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_take_calendar_requests() -> CalendarRequestListResponse {
    match PENDING_CALENDAR_REQUESTS.lock() {
        Ok(mut pending) => CalendarRequestListResponse {
            ok: true,
            items: std::mem::take(&mut *pending),
            message: String::new(),
        },
        Err(_) => {
            warn!("event=calendar_queue module=ffi status=error error_code=poisoned");
            CalendarRequestListResponse {
                ok: false,
                items: Vec::new(),
                message: "calendar queue unavailable".to_string(),
            }
        }
    }
}

/// Hands calendar requests to the host through [`PENDING_CALENDAR_REQUESTS`].
struct HostCalendarQueue;

impl HostCalendarQueue {
    fn enqueue(&self, item: CalendarRequestItem) -> Result<(), CalendarError> {
        PENDING_CALENDAR_REQUESTS
            .lock()
            .map(|mut pending| pending.push(item))
            .map_err(|_| CalendarError::Failed("calendar queue unavailable".to_string()))
    }
}

impl CalendarSink for HostCalendarQueue {
    fn create_event(&self, request: &CalendarEventRequest) -> Result<(), CalendarError> {
        self.enqueue(CalendarRequestItem {
            kind: CalendarRequestKind::Event,
            title: request.title.clone(),
            start_time: format_timestamp(request.start),
            end_time: format_timestamp(request.end),
            alarm_lead_minutes: request.alarm_lead_minutes,
        })
    }

    fn create_reminder(&self, request: &ReminderRequest) -> Result<(), CalendarError> {
        self.enqueue(CalendarRequestItem {
            kind: CalendarRequestKind::Reminder,
            title: request.title.clone(),
            start_time: format_timestamp(request.due),
            end_time: String::new(),
            alarm_lead_minutes: 0,
        })
    }
}

/// Builds the dial payload for query instant `now_epoch_ms`.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_dial(now_epoch_ms: i64) -> DialResponse {
    let Some(now) = naive_from_epoch_ms(now_epoch_ms) else {
        return dial_failure("planner_dial failed: invalid timestamp");
    };
    let planner = match lock_session() {
        Ok(planner) => planner,
        Err(err) => return dial_failure(err),
    };

    let snapshot = planner.dial_snapshot(now);
    let message = match &snapshot.active {
        Some(_) => "Active schedule.".to_string(),
        None => "No active schedule.".to_string(),
    };
    DialResponse {
        ok: true,
        slices: snapshot.slices.iter().map(to_dial_slice_item).collect(),
        active: snapshot.active.as_ref().map(to_schedule_item),
        remaining_minutes: snapshot.remaining_minutes,
        clock_label: snapshot.clock_label,
        message,
    }
}

/// Looks up one schedule by its string ID.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_select(schedule_id: String) -> ScheduleActionResponse {
    let id = match ScheduleId::parse_str(schedule_id.trim()) {
        Ok(id) => id,
        Err(err) => {
            return ScheduleActionResponse::failure(format!("planner_select failed: {err}"))
        }
    };
    let planner = match lock_session() {
        Ok(planner) => planner,
        Err(err) => return ScheduleActionResponse::failure(err),
    };
    match planner.select(id) {
        Ok(schedule) => ScheduleActionResponse {
            ok: true,
            persisted: false,
            item: Some(to_schedule_item(schedule)),
            message: String::new(),
        },
        Err(err) => ScheduleActionResponse::failure(format!("planner_select failed: {err}")),
    }
}

/// Resolves a tap at `angle` (dial degrees) to the topmost schedule.
#[flutter_rust_bridge::frb(sync)]
pub fn planner_select_at_angle(angle: f64, now_epoch_ms: i64) -> Option<ScheduleItem> {
    let now = naive_from_epoch_ms(now_epoch_ms)?;
    let planner = lock_session().ok()?;
    planner.select_at_angle(angle, now).map(to_schedule_item)
}

fn lock_session() -> Result<MutexGuard<'static, PlannerService<SqliteScheduleBackend>>, String> {
    PLANNER_SESSION
        .get_or_init(|| {
            let backend = SqliteScheduleBackend::new(resolve_planner_db_path());
            let planner = PlannerService::new(backend, PlannerConfig::default())
                .with_calendar(Box::new(HostCalendarQueue));
            Mutex::new(planner)
        })
        .lock()
        .map_err(|_| {
            warn!("event=session_lock module=ffi status=error error_code=poisoned");
            "planner session unavailable".to_string()
        })
}

fn resolve_planner_db_path() -> PathBuf {
    PLANNER_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("CHRONORBIT_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PLANNER_DB_FILE_NAME)
        })
        .clone()
}

fn local_from_epoch_ms(epoch_ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(epoch_ms).single()
}

fn naive_from_epoch_ms(epoch_ms: i64) -> Option<NaiveDateTime> {
    local_from_epoch_ms(epoch_ms).map(|value| value.naive_local())
}

fn dial_failure(message: impl Into<String>) -> DialResponse {
    DialResponse {
        ok: false,
        slices: Vec::new(),
        active: None,
        remaining_minutes: None,
        clock_label: String::new(),
        message: message.into(),
    }
}

fn to_schedule_item(schedule: &Schedule) -> ScheduleItem {
    ScheduleItem {
        schedule_id: schedule.id.to_string(),
        title: schedule.title.clone(),
        start_time: format_timestamp(schedule.start),
        end_time: format_timestamp(schedule.end),
    }
}

fn to_dial_slice_item(slice: &LayoutSlice) -> DialSliceItem {
    let [r, g, b] = slice.color.to_rgb();
    DialSliceItem {
        schedule_id: slice.schedule_id.to_string(),
        title: slice.title.clone(),
        start_angle: slice.start_angle,
        end_angle: slice.end_angle,
        sweep_degrees: slice.sweep_degrees(),
        color_rgb: (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b),
        is_active: slice.is_active,
        crosses_midnight: slice.crosses_midnight,
        layer: u32::try_from(slice.overlap_depth).unwrap_or(u32::MAX),
    }
}
