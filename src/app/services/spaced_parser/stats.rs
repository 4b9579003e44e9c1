//! Parsing statistics for report processing
//!
//! This module provides counters for tracking how much of a report's input
//! survived each filtering step, for diagnostics and reporting.

use serde::{Deserialize, Serialize};

/// Simple line-level parsing statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total number of source lines after the header, blanks included
    pub total_lines: usize,

    /// Number of lines tokenized into the document
    pub data_lines: usize,

    /// Number of blank or whitespace-only lines filtered out
    pub blank_lines_skipped: usize,

    /// Number of data lines that produced fewer fields than columns
    pub short_lines: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            data_lines: 0,
            blank_lines_skipped: 0,
            short_lines: 0,
        }
    }

    /// Whether every tokenized line filled all columns
    pub fn is_complete(&self) -> bool {
        self.short_lines == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
