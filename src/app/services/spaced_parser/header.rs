//! Header scanning and column span inference
//!
//! A report's header line is the only description of its column layout, so
//! each header label's own word boundaries are used to approximate the true
//! column positions. The tokenizer corrects for data values that overflow
//! this approximation.

use serde::{Deserialize, Serialize};

/// A single column inferred from a report header line
///
/// Offsets are 0-based character (not byte) indices into the header line,
/// both inclusive. Spans are produced in ascending order and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderItem {
    /// Column label text
    pub name: String,

    /// Offset of the label's first character (inclusive)
    pub start: usize,

    /// Offset of the last character covered by the column span (inclusive)
    pub end: usize,
}

impl HeaderItem {
    /// Create a header item from a label and its inclusive span
    pub fn new(name: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Width of the span in characters
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Scan a header line and infer one column span per label token.
///
/// A token is a maximal run of non-whitespace characters. Its span runs from
/// the token's first character up to the character immediately before the
/// whitespace that terminates it; a trailing token with no terminating
/// whitespace is closed at the end of the line.
///
/// This routine is total: any input (including an empty or whitespace-only
/// line) produces a possibly empty list and never fails.
pub fn segment_header(header_line: &str) -> Vec<HeaderItem> {
    let chars: Vec<char> = header_line.chars().collect();
    let mut items = Vec::new();

    let mut token_start = 0;
    let mut in_token = false;

    for (i, c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            if in_token {
                let name: String = chars[token_start..i].iter().collect();
                items.push(HeaderItem::new(name, token_start, i - 1));
                in_token = false;
            }
        } else if !in_token {
            token_start = i;
            in_token = true;
        }
    }

    // Close a trailing token that runs to the end of the line
    if in_token {
        let name: String = chars[token_start..].iter().collect();
        items.push(HeaderItem::new(name, token_start, chars.len() - 1));
    }

    items
}
