//! Session-scoped schedule storage.
//!
//! # Responsibility
//! - Hold the ordered, append-only schedule sequence for one session.
//!
//! # Invariants
//! - Insertion order is preserved; it drives color assignment and z-order.
//! - Durable storage is delegated to backend collaborators, not this store.

pub mod schedule_store;
