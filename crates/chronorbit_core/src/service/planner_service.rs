//! Planner facade used by the UI layer.
//!
//! # Responsibility
//! - Accept new schedules and forward them to collaborators.
//! - Answer render-pass and tick queries (layout, active schedule).
//! - Resolve selection requests by identity or dial angle.
//!
//! # Invariants
//! - Appends are optimistic: collaborator failures never undo them.
//! - Calendar and reminder calls are independent and never surface errors.
//! - No automatic retry happens anywhere in the facade.

use crate::backend::calendar::{CalendarEventRequest, CalendarSink, ReminderRequest};
use crate::backend::schedule_backend::{ScheduleBackend, ScheduleInsert};
use crate::config::PlannerConfig;
use crate::layout::dial::{hit_test, layout, LayoutSlice};
use crate::model::schedule::{normalize_title, Schedule, ScheduleId};
use crate::resolve::active::{find_active, remaining_minutes};
use crate::store::schedule_store::ScheduleStore;
use crate::time::normalize::{clock_label, combine};
use chrono::NaiveDateTime;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// The requested schedule is not in the store.
    NotFound(ScheduleId),
    /// `end < start` while ordered ranges are enforced.
    InvalidRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "schedule not found: {id}"),
            Self::InvalidRange { start, end } => {
                write!(f, "schedule end ({end}) must be >= start ({start})")
            }
        }
    }
}

impl Error for PlannerError {}

/// Result of handing an appended schedule to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceStatus {
    /// Message lists both formatted timestamps.
    Confirmed { message: String },
    /// Message is the backend's description, verbatim.
    Failed { message: String },
}

impl PersistenceStatus {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Confirmed { message } | Self::Failed { message } => message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddScheduleOutcome {
    pub schedule: Schedule,
    pub persistence: PersistenceStatus,
}

/// Everything one render pass of the dial needs.
#[derive(Debug, Clone, PartialEq)]
pub struct DialSnapshot {
    pub slices: Vec<LayoutSlice>,
    pub active: Option<Schedule>,
    pub remaining_minutes: Option<i64>,
    pub clock_label: String,
}

/// Facade composing the store, layout engine and resolver.
pub struct PlannerService<B: ScheduleBackend> {
    store: ScheduleStore,
    backend: B,
    calendar: Option<Box<dyn CalendarSink>>,
    config: PlannerConfig,
}

impl<B: ScheduleBackend> PlannerService<B> {
    /// Creates a facade over the given backend with an empty store.
    pub fn new(backend: B, config: PlannerConfig) -> Self {
        Self {
            store: ScheduleStore::new(),
            backend,
            calendar: None,
            config,
        }
    }

    /// Attaches a calendar/reminder collaborator.
    pub fn with_calendar(mut self, calendar: Box<dyn CalendarSink>) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Appends a schedule and forwards it to collaborators.
    ///
    /// # Errors
    /// - `InvalidRange` when `enforce_ordered_range` is set and `end < start`.
    ///   Nothing is appended in that case.
    pub fn add_schedule(
        &mut self,
        title: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> PlannerResult<AddScheduleOutcome> {
        if self.config.enforce_ordered_range && end < start {
            warn!("event=schedule_append module=service status=rejected error_code=invalid_range");
            return Err(PlannerError::InvalidRange { start, end });
        }

        let schedule = Schedule::new(
            normalize_title(title, &self.config.placeholder_title),
            start,
            end,
        );
        self.store.append(schedule.clone());
        info!(
            "event=schedule_append module=service status=ok schedule_id={} count={}",
            schedule.id,
            self.store.len()
        );

        let persistence = self.persist(&schedule);
        self.notify_calendar(&schedule);

        Ok(AddScheduleOutcome {
            schedule,
            persistence,
        })
    }

    /// Anchors both time-of-day values onto `day`, then appends.
    pub fn add_schedule_on(
        &mut self,
        title: &str,
        day: NaiveDateTime,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> PlannerResult<AddScheduleOutcome> {
        let start = combine(day, start_time);
        let end = combine(day, end_time);
        self.add_schedule(title, start, end)
    }

    /// All schedules in insertion order.
    pub fn schedules(&self) -> &[Schedule] {
        self.store.all()
    }

    pub fn current_layout(&self, now: NaiveDateTime) -> Vec<LayoutSlice> {
        layout(self.store.all(), now)
    }

    pub fn active_schedule(&self, now: NaiveDateTime) -> Option<&Schedule> {
        find_active(self.store.all(), now)
    }

    /// Remaining minutes of the active schedule, if any.
    pub fn remaining_minutes(&self, now: NaiveDateTime) -> Option<i64> {
        self.active_schedule(now)
            .map(|schedule| remaining_minutes(schedule, now))
    }

    /// Looks up a schedule for detail display.
    ///
    /// # Errors
    /// - `NotFound` when `id` is not in the store.
    pub fn select(&self, id: ScheduleId) -> PlannerResult<&Schedule> {
        self.store.get(id).ok_or(PlannerError::NotFound(id))
    }

    /// Resolves a tap at `angle` (dial degrees) to the topmost schedule.
    pub fn select_at_angle(&self, angle: f64, now: NaiveDateTime) -> Option<&Schedule> {
        let slices = self.current_layout(now);
        let slice = hit_test(&slices, angle)?;
        self.store.get(slice.schedule_id)
    }

    pub fn dial_snapshot(&self, now: NaiveDateTime) -> DialSnapshot {
        let active = self.active_schedule(now).cloned();
        let remaining = active
            .as_ref()
            .map(|schedule| remaining_minutes(schedule, now));

        DialSnapshot {
            slices: self.current_layout(now),
            active,
            remaining_minutes: remaining,
            clock_label: clock_label(now),
        }
    }

    fn persist(&self, schedule: &Schedule) -> PersistenceStatus {
        let record = ScheduleInsert::from_schedule(schedule);
        match self.backend.insert(&record) {
            Ok(()) => {
                info!(
                    "event=backend_insert module=service status=ok schedule_id={}",
                    schedule.id
                );
                PersistenceStatus::Confirmed {
                    message: format!("Saved {} - {}", record.start_time, record.end_time),
                }
            }
            Err(err) => {
                warn!(
                    "event=backend_insert module=service status=error schedule_id={}",
                    schedule.id
                );
                PersistenceStatus::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    fn notify_calendar(&self, schedule: &Schedule) {
        let Some(calendar) = self.calendar.as_deref() else {
            return;
        };

        let event = CalendarEventRequest {
            title: schedule.title.clone(),
            start: schedule.start,
            end: schedule.end,
            alarm_lead_minutes: self.config.reminder_lead_minutes,
        };
        match calendar.create_event(&event) {
            Ok(()) => info!("event=calendar_event module=service status=ok"),
            Err(err) => warn!("event=calendar_event module=service status=error error={err}"),
        }

        let reminder = ReminderRequest {
            title: schedule.title.clone(),
            due: schedule.start,
        };
        match calendar.create_reminder(&reminder) {
            Ok(()) => info!("event=calendar_reminder module=service status=ok"),
            Err(err) => warn!("event=calendar_reminder module=service status=error error={err}"),
        }
    }
}
