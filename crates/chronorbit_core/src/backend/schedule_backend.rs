//! Persistence collaborator contract.

use crate::db::DbError;
use crate::model::schedule::Schedule;
use crate::time::normalize::format_timestamp;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BackendResult<T> = Result<T, BackendError>;

/// Failure reported by a persistence collaborator.
///
/// `Display` yields the collaborator's description verbatim.
#[derive(Debug)]
pub enum BackendError {
    Unavailable(String),
    Rejected(String),
    Db(DbError),
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) | Self::Rejected(message) => write!(f, "{message}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable(_) | Self::Rejected(_) => None,
        }
    }
}

impl From<DbError> for BackendError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for BackendError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Insert record handed to the backend, with `yyyy-MM-dd HH:mm:ss` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleInsert {
    pub title: String,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleInsert {
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            title: schedule.title.clone(),
            start_time: format_timestamp(schedule.start),
            end_time: format_timestamp(schedule.end),
        }
    }
}

/// Durable storage seam for finalized schedules.
pub trait ScheduleBackend {
    fn insert(&self, record: &ScheduleInsert) -> BackendResult<()>;
}

impl<T: ScheduleBackend + ?Sized> ScheduleBackend for &T {
    fn insert(&self, record: &ScheduleInsert) -> BackendResult<()> {
        (**self).insert(record)
    }
}
