//! Domain model for recorded schedules.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every schedule is identified by a stable `ScheduleId`.
//! - Schedules are append-only for a session; no update or delete exists.

pub mod schedule;
