//! Parser for space-aligned fixed-width report files
//!
//! Legacy reporting tools emit tables whose columns are aligned by character
//! position, with no delimiter. This module infers each column's character
//! span from the report's own header line and splits every data line into
//! per-column fields using those spans, compensating for values that are
//! visually wider than their header label.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`header`] - Header scanning and column span inference
//! - [`tokenizer`] - Per-line field extraction with overrun correction
//! - [`document`] - Document assembly and read-only access
//! - [`parser`] - File/string orchestration and blank-line filtering
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use spaced_report::app::services::spaced_parser;
//!
//! # fn example() -> spaced_report::Result<()> {
//! let report = "Day Max Min\n1   30*  12\n";
//! let result = spaced_parser::parse_str(report)?;
//!
//! println!(
//!     "Parsed {} data lines across {} columns",
//!     result.stats.data_lines,
//!     result.document.column_count()
//! );
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod header;
pub mod parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use document::SpacedDocument;
pub use header::{HeaderItem, segment_header};
pub use parser::{ParseResult, parse_file, parse_str};
pub use stats::ParseStats;
pub use tokenizer::{LineData, tokenize_line};
