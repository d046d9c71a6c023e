//! Flutter bridge for the ChronOrbit core.

pub mod api;
