//! Document assembly and read-only access
//!
//! A [`SpacedDocument`] owns the column spans inferred from the header line
//! and the accumulated data lines. It is built by a single producer in file
//! order and read afterwards; no update or deletion operation exists.

use crate::{Error, Result};

use super::header::{HeaderItem, segment_header};
use super::tokenizer::{LineData, tokenize_line};

/// A parsed fixed-width report: inferred columns plus accumulated lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacedDocument {
    header_items: Vec<HeaderItem>,
    lines: Vec<LineData>,
}

impl SpacedDocument {
    /// Create a document by segmenting the given header line.
    ///
    /// Always succeeds; a blank or whitespace-only header produces a document
    /// with zero columns (every subsequent line then tokenizes to nothing).
    pub fn new(header_line: &str) -> Self {
        Self {
            header_items: segment_header(header_line),
            lines: Vec::new(),
        }
    }

    /// Tokenize a data line against the stored header items and append it.
    ///
    /// Callers are responsible for filtering blank lines before calling;
    /// blank lines carry no data and are skipped upstream.
    pub fn add_line(&mut self, raw_line: &str) -> &LineData {
        let line = tokenize_line(&self.header_items, raw_line);
        self.lines.push(line);
        self.lines.last().expect("line was just appended")
    }

    /// Columns inferred from the header line, in left-to-right order
    pub fn header_items(&self) -> &[HeaderItem] {
        &self.header_items
    }

    /// Accumulated data lines, in input order
    pub fn lines(&self) -> &[LineData] {
        &self.lines
    }

    /// Number of inferred columns
    pub fn column_count(&self) -> usize {
        self.header_items.len()
    }

    /// Position of a named column, matched case-insensitively.
    ///
    /// Returns [`Error::ColumnNotFound`] when no header label matches.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.header_items
            .iter()
            .position(|item| item.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::column_not_found(name))
    }
}
