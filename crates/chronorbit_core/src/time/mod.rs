//! Time normalization for schedule input and dial layout.
//!
//! # Responsibility
//! - Anchor time-of-day picker values onto a day reference.
//! - Reduce instants to minutes-of-day for angular mapping.
//! - Render the fixed textual timestamp pattern used by collaborators.
//!
//! # Invariants
//! - No timezone conversion happens in core; all values are local wall-clock.

pub mod normalize;
