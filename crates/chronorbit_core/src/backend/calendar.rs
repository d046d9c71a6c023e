//! Calendar/reminder collaborator contract.
//!
//! Both requests are best-effort side calls: the facade attempts each one
//! independently and only logs failures.

use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The user has not granted calendar or reminder access.
    AccessDenied,
    Failed(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied => write!(f, "calendar access denied"),
            Self::Failed(message) => write!(f, "{message}"),
        }
    }
}

impl Error for CalendarError {}

/// Event written to the OS calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventRequest {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Alarm fires this many minutes before `start`.
    pub alarm_lead_minutes: i64,
}

/// Reminder due at a schedule's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub title: String,
    pub due: NaiveDateTime,
}

/// OS calendar/reminder seam, gated by the host's permission state.
pub trait CalendarSink: Send {
    fn create_event(&self, request: &CalendarEventRequest) -> Result<(), CalendarError>;
    fn create_reminder(&self, request: &ReminderRequest) -> Result<(), CalendarError>;
}
