//! Outbound collaborator contracts.
//!
//! # Responsibility
//! - Define the persistence and calendar seams the facade calls after an
//!   append.
//! - Provide the SQLite reference backend.
//!
//! # Invariants
//! - Collaborators are injected at facade construction, never global.
//! - Collaborator failures never roll back the in-memory store.

pub mod calendar;
pub mod schedule_backend;
pub mod sqlite;
