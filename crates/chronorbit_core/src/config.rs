//! Planner configuration.
//!
//! # Responsibility
//! - Hold the policy knobs the facade applies to incoming schedules.
//! - Carry host-facing cadence values the core itself never acts on.
//!
//! # Invariants
//! - Every field has a default, so partial host documents deserialize.

use serde::{Deserialize, Serialize};

/// Title used when the submitted title is blank.
pub const DEFAULT_PLACEHOLDER_TITLE: &str = "Untitled";
/// Calendar alarm lead time before a schedule starts.
pub const DEFAULT_REMINDER_LEAD_MINUTES: i64 = 5;
/// Cadence at which the host refreshes the query instant.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub placeholder_title: String,
    pub reminder_lead_minutes: i64,
    /// Read by the host timer; core operations take the instant as input.
    pub refresh_interval_secs: u64,
    /// Reject `end < start` at the facade instead of accepting it as-is.
    pub enforce_ordered_range: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            placeholder_title: DEFAULT_PLACEHOLDER_TITLE.to_string(),
            reminder_lead_minutes: DEFAULT_REMINDER_LEAD_MINUTES,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
            enforce_ordered_range: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PlannerConfig;

    #[test]
    fn defaults_accept_reversed_ranges() {
        let config = PlannerConfig::default();
        assert_eq!(config.placeholder_title, "Untitled");
        assert_eq!(config.reminder_lead_minutes, 5);
        assert_eq!(config.refresh_interval_secs, 60);
        assert!(!config.enforce_ordered_range);
    }
}
