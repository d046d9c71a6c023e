//! Core use-case services.
//!
//! # Responsibility
//! - Compose store, layout and resolver into the UI-facing facade.
//! - Keep UI/FFI layers decoupled from collaborator details.

pub mod planner_service;
