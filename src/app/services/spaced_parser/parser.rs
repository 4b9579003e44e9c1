//! Report parsing orchestration
//!
//! This module handles file reading, header-line extraction, and blank-line
//! filtering, coordinating the scanning components into a finished
//! [`SpacedDocument`] plus parsing statistics.

use std::path::Path;

use tracing::{debug, info};

use crate::{Error, Result};

use super::document::SpacedDocument;
use super::stats::ParseStats;

/// Parsing result with the finished document and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed report
    pub document: SpacedDocument,

    /// Line-level parsing statistics
    pub stats: ParseStats,
}

/// Parse a fixed-width report file and return the document with statistics.
///
/// The whole file is materialized in memory; reports are small. The first
/// line is the header, and blank data lines are skipped before tokenization.
pub async fn parse_file(file_path: &Path) -> Result<ParseResult> {
    info!("Parsing spaced report file: {}", file_path.display());

    let content = tokio::fs::read_to_string(file_path).await.map_err(|e| {
        Error::io(
            format!("Failed to read report file {}", file_path.display()),
            e,
        )
    })?;

    parse_content(&content, &file_path.display().to_string())
}

/// Parse report content already held in memory.
pub fn parse_str(content: &str) -> Result<ParseResult> {
    parse_content(content, "string input")
}

/// Shared parsing path for file and string inputs.
///
/// The header line is mandatory: an input with no first line at all fails
/// with [`Error::MissingHeader`]. A present-but-blank header line succeeds
/// and produces a zero-column document.
fn parse_content(content: &str, origin: &str) -> Result<ParseResult> {
    let mut source_lines = content.lines();

    let header_line = source_lines
        .next()
        .ok_or_else(|| Error::missing_header(origin))?;

    let mut document = SpacedDocument::new(header_line);
    let mut stats = ParseStats::new();
    let column_count = document.column_count();

    debug!(
        "Inferred {} columns from header: {:?}",
        column_count,
        document
            .header_items()
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
    );

    for line in source_lines {
        stats.total_lines += 1;

        // Blank lines carry no data and must never reach the tokenizer
        if line.trim().is_empty() {
            stats.blank_lines_skipped += 1;
            continue;
        }

        let line_data = document.add_line(line);
        stats.data_lines += 1;
        if line_data.len() < column_count {
            stats.short_lines += 1;
        }
    }

    info!(
        "Parsed {} data lines across {} columns ({} blank skipped)",
        stats.data_lines, column_count, stats.blank_lines_skipped
    );

    Ok(ParseResult { document, stats })
}
