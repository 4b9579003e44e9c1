//! Command-line argument definitions for the spaced report tool
//!
//! This module defines the complete CLI interface using the clap derive API:
//! one subcommand per report analysis plus a column-inspection command.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the spaced report tool
///
/// Parses legacy fixed-width text reports whose columns are aligned by
/// character position, and answers column-spread queries over them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spaced-report",
    version,
    about = "Parse space-aligned fixed-width text reports and answer column-spread queries",
    long_about = "Parses plain-text tabular reports whose columns are aligned by fixed \
                  character positions rather than a delimiter. Column spans are inferred \
                  at runtime from the report's own header line, and data values that \
                  overrun their column boundary are recovered in full."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the spaced report tool
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Find the team with the smallest goal difference in a league table
    Soccer(SoccerArgs),
    /// Find the day with the smallest temperature spread in a weather log
    Weather(WeatherArgs),
    /// Inspect the columns inferred from a report's header line
    Columns(ColumnsArgs),
}

/// Arguments shared by every report-reading subcommand
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Path to the fixed-width report file
    #[arg(value_name = "REPORT", help = "Path to the fixed-width report file")]
    pub report_file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and the final answer. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors and the final answer",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for machine-readable results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the soccer command (league-table analysis)
#[derive(Debug, Clone, Parser)]
pub struct SoccerArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the weather command (temperature-log analysis)
#[derive(Debug, Clone, Parser)]
pub struct WeatherArgs {
    #[command(flatten)]
    pub report: ReportArgs,
}

/// Arguments for the columns command (header inspection)
#[derive(Debug, Clone, Parser)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Also print every tokenized data line
    ///
    /// By default, only the inferred column table and parse statistics are
    /// shown. This flag dumps each line's extracted fields as well.
    #[arg(long = "lines", help = "Also print every tokenized data line")]
    pub show_lines: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ReportArgs {
    /// Validate the report arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.report_file.exists() {
            return Err(Error::file_not_found(
                self.report_file.display().to_string(),
            ));
        }

        if !self.report_file.is_file() {
            return Err(Error::configuration(format!(
                "Report path is not a file: {}",
                self.report_file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show a progress spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn report_args(path: PathBuf) -> ReportArgs {
        ReportArgs {
            report_file: path,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }

    #[test]
    fn test_validation_accepts_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Day Max Min\n").unwrap();

        let args = report_args(file.path().to_path_buf());
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_missing_file() {
        let args = report_args(PathBuf::from("/nonexistent/report.txt"));
        let error = args.validate().unwrap_err();

        assert!(matches!(error, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_validation_rejects_directory() {
        let dir = tempfile::TempDir::new().unwrap();

        let args = report_args(dir.path().to_path_buf());
        let error = args.validate().unwrap_err();

        assert!(matches!(error, Error::Configuration { .. }));
    }

    #[test]
    fn test_log_level() {
        let mut args = report_args(PathBuf::from("report.txt"));

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = report_args(PathBuf::from("report.txt"));
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_subcommand_parsing() {
        let args = Args::parse_from(["spaced-report", "soccer", "league.txt", "-v"]);

        match args.get_command() {
            Commands::Soccer(soccer) => {
                assert_eq!(soccer.report.report_file, PathBuf::from("league.txt"));
                assert_eq!(soccer.report.verbose, 1);
            }
            other => panic!("Expected soccer command, got {:?}", other),
        }
    }

    #[test]
    fn test_columns_flags() {
        let args = Args::parse_from([
            "spaced-report",
            "columns",
            "report.txt",
            "--lines",
            "--format",
            "json",
        ]);

        match args.get_command() {
            Commands::Columns(columns) => {
                assert!(columns.show_lines);
                assert_eq!(columns.report.output_format, OutputFormat::Json);
            }
            other => panic!("Expected columns command, got {:?}", other),
        }
    }
}
