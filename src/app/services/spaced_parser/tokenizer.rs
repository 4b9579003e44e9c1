//! Per-line field extraction with column-overrun correction
//!
//! Field boundaries inferred from the header are only approximate: a data
//! value can be visually wider than its header label (a long team name under
//! a short "Team" heading) and spill into the space reserved for the next
//! column. The tokenizer grows each field past its inferred end until a
//! whitespace boundary closes it, on the assumption that a single space
//! always separates adjacent real values.

use serde::{Deserialize, Serialize};

use super::header::HeaderItem;

/// Ordered field values extracted from one data line
///
/// May hold fewer fields than the document has columns when the source line
/// ended early; trailing columns simply produce no field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineData {
    fields: Vec<String>,
}

impl LineData {
    /// Create line data from already-extracted fields
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Field at the given column position, if the line reached that column
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of fields extracted from the line
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the line produced no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields in column order
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Iterate over the fields in column order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }
}

/// Split one data line into fields using the spans inferred from the header.
///
/// Columns are processed left to right with a running cursor, so fields come
/// out in header order, are never duplicated, and never overlap in source
/// offsets. Processing stops once the cursor passes the end of the line,
/// yielding a [`LineData`] shorter than the column count. An all-whitespace
/// span yields an empty string and is never extended. The routine is total:
/// malformed input degrades to fewer fields, never an error.
pub fn tokenize_line(header_items: &[HeaderItem], line: &str) -> LineData {
    let Some(first) = header_items.first() else {
        return LineData::default();
    };

    let chars: Vec<char> = line.chars().collect();
    let mut fields = Vec::with_capacity(header_items.len());
    let mut cursor = first.start;

    for item in header_items {
        if cursor >= chars.len() {
            break;
        }

        // A long value in an earlier column can swallow this column's span
        // whole; clamp so the scan never walks backwards.
        let mut end_check = item.end.min(chars.len() - 1).max(cursor);

        if chars[cursor..=end_check].iter().all(|c| c.is_whitespace()) {
            fields.push(String::new());
            cursor = end_check + 1;
            continue;
        }

        // The value may end past the inferred column end; grow the span until
        // a whitespace boundary marks the real end of the value.
        while end_check < chars.len() - 1
            && !chars[end_check].is_whitespace()
            && !chars[end_check + 1].is_whitespace()
        {
            end_check += 1;
        }

        let value: String = chars[cursor..=end_check].iter().collect();
        fields.push(value.trim().to_string());

        cursor = end_check + 1;
    }

    LineData::new(fields)
}
