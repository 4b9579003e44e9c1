//! Spaced Report Library
//!
//! A Rust library for parsing legacy fixed-width text reports whose columns
//! are aligned by character position rather than an explicit delimiter.
//!
//! This library provides tools for:
//! - Inferring column spans from a report's own header line
//! - Tokenizing data lines into per-column fields, compensating for values
//!   that overrun their inferred column boundary
//! - Extracting league-table standings and daily temperature readings from
//!   parsed reports
//! - Locating columns by name with case-insensitive lookup
//! - Comprehensive error handling with graceful per-line degradation

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_parsers;
        pub mod league_table;
        pub mod spaced_parser;
        pub mod temperature_log;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DayTemperature, TeamStanding};
pub use app::services::spaced_parser::{
    HeaderItem, LineData, ParseResult, ParseStats, SpacedDocument,
};

/// Result type alias for the spaced report parser
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for report parsing and analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report input had no header line to infer columns from
    #[error("Missing header line in {origin}")]
    MissingHeader { origin: String },

    /// A named column was not found among the inferred header items
    #[error("Column '{name}' not found in report header")]
    ColumnNotFound { name: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a missing header error
    pub fn missing_header(origin: impl Into<String>) -> Self {
        Self::MissingHeader {
            origin: origin.into(),
        }
    }

    /// Create a column not found error
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::DataValidation {
            message: format!("JSON serialization failed: {}", error),
        }
    }
}
