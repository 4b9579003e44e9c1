//! Field parsing utilities for report values
//!
//! This module provides helper functions for interpreting extracted field
//! text as numbers, tolerating the decoration markers legacy reports attach
//! to values. The parsing core never validates field content; these helpers
//! are where callers choose how strictly to interpret it.

use crate::constants::{GOAL_CONTINUATION_MARKER, TEMPERATURE_RECORD_MARKER};
use crate::{Error, Result};

/// Parse a goal count, tolerating a leading continuation marker.
///
/// Some league tables print a `-` between the for and against columns; a
/// value captured with that marker attached ("- 36") still parses as 36.
pub fn parse_goal_count(value: &str) -> Result<i32> {
    let cleaned = value
        .strip_prefix(GOAL_CONTINUATION_MARKER)
        .map(str::trim)
        .unwrap_or(value);

    cleaned.trim().parse::<i32>().map_err(|e| {
        Error::data_validation(format!("Invalid goal count '{}' ({})", value, e))
    })
}

/// Parse a temperature reading, stripping the record marker.
///
/// Record highs and lows are flagged with a trailing `*` (e.g. "30*");
/// the marker is dropped before invariant numeric parsing.
pub fn parse_temperature(value: &str) -> Result<f64> {
    let cleaned = value
        .strip_suffix(TEMPERATURE_RECORD_MARKER)
        .unwrap_or(value);

    cleaned.trim().parse::<f64>().map_err(|e| {
        Error::data_validation(format!("Invalid temperature '{}' ({})", value, e))
    })
}

/// Parse a day number, yielding `None` for non-numeric rows.
///
/// Temperature logs end with summary rows ("mo") whose day field is not a
/// number; those rows carry no daily reading and are skipped by callers.
pub fn parse_day_number(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}
