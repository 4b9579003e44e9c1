//! Application constants for the spaced report parser
//!
//! This module contains the column names, positional indices, and field
//! markers shared between the parsing core and the report analyses.

// =============================================================================
// Column Name Constants
// =============================================================================

/// Named columns consumed by the league-table analysis
pub mod columns {
    /// Column holding the ranked team name (e.g. "1. Arsenal")
    pub const TEAM: &str = "Team";

    /// Goals scored ("for") column
    pub const GOALS_FOR: &str = "F";

    /// Goals conceded ("against") column
    pub const GOALS_AGAINST: &str = "A";
}

// =============================================================================
// Positional Columns (temperature log layout)
// =============================================================================

/// Day-number column position in a temperature log
pub const DAY_COLUMN_INDEX: usize = 0;

/// Maximum-temperature column position in a temperature log
pub const MAX_TEMPERATURE_COLUMN_INDEX: usize = 1;

/// Minimum-temperature column position in a temperature log
pub const MIN_TEMPERATURE_COLUMN_INDEX: usize = 2;

// =============================================================================
// Field Markers
// =============================================================================

/// Marker appended to record temperature values (e.g. "30*")
pub const TEMPERATURE_RECORD_MARKER: char = '*';

/// Continuation marker some league tables print ahead of goal counts
pub const GOAL_CONTINUATION_MARKER: char = '-';

// =============================================================================
// Logging
// =============================================================================

/// Default tracing filter target for this crate
pub const LOG_TARGET: &str = "spaced_report";
