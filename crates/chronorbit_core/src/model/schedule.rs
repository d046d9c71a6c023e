//! Schedule domain model.
//!
//! # Responsibility
//! - Define the named time interval recorded by the user.
//! - Own the title placeholder policy applied at creation time.
//!
//! # Invariants
//! - `id` is generated once and never reused for another schedule.
//! - A schedule is immutable after it has been appended to a store.
//! - `end > start` is expected but not enforced here.

use crate::config::DEFAULT_PLACEHOLDER_TITLE;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a schedule.
pub type ScheduleId = Uuid;

/// A named `[start, end]` interval in the viewer's local calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Opaque identity assigned at creation.
    pub id: ScheduleId,
    /// Display title. Never empty when created through `normalize_title`.
    pub title: String,
    /// Local wall-clock start instant.
    pub start: NaiveDateTime,
    /// Local wall-clock end instant.
    pub end: NaiveDateTime,
}

impl Schedule {
    /// Creates a schedule with a freshly generated identity.
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self::with_id(Uuid::new_v4(), title, start, end)
    }

    /// Creates a schedule with a caller-provided identity.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: ScheduleId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
        }
    }

    /// Returns whether `instant` lies in `[start, end]`, inclusive on both ends.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Returns whether the range is ordered (`end >= start`).
    pub fn is_ordered(&self) -> bool {
        self.end >= self.start
    }
}

/// Applies the title placeholder policy.
///
/// Input is trimmed; an empty result is replaced by `placeholder`, or by
/// [`DEFAULT_PLACEHOLDER_TITLE`] when `placeholder` is blank as well.
pub fn normalize_title(input: &str, placeholder: &str) -> String {
    let trimmed = input.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    let placeholder = placeholder.trim();
    if placeholder.is_empty() {
        DEFAULT_PLACEHOLDER_TITLE.to_string()
    } else {
        placeholder.to_string()
    }
}
