//! In-memory append-only schedule store.

use crate::model::schedule::{Schedule, ScheduleId};

/// Ordered, additive collection of schedules.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    schedules: Vec<Schedule>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one schedule at the end of the sequence.
    pub fn append(&mut self, schedule: Schedule) {
        self.schedules.push(schedule);
    }

    /// Returns a read-only view of all schedules in insertion order.
    pub fn all(&self) -> &[Schedule] {
        &self.schedules
    }

    /// Looks up one schedule by identity.
    pub fn get(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.iter().find(|schedule| schedule.id == id)
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
