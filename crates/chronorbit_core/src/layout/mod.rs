//! Circular 24-hour dial layout.
//!
//! # Responsibility
//! - Map schedules onto start/end angles of a 360° dial.
//! - Assign ordinal-derived colors and overlap layers for rendering.
//! - Resolve taps on the dial back to a slice.
//!
//! # Invariants
//! - One slice per schedule per render, in store order.
//! - Angles are measured clockwise from 12 o'clock.
//! - Midnight-crossing ranges keep their inverted angle pair; renderers read
//!   `crosses_midnight` and `sweep_degrees()` instead.

pub mod color;
pub mod dial;
