//! Active-interval resolution against a query instant.
//!
//! # Responsibility
//! - Find the schedule that is "current" at a given instant.
//! - Compute remaining minutes for the active schedule.
//!
//! # Invariants
//! - Pure functions of their inputs; no wall-clock access or timers here.
//! - Overlapping matches are broken by store order, first wins.

pub mod active;
