//! Command implementations for the spaced report CLI
//!
//! This module contains the main command execution logic and output
//! formatting for the CLI interface. Each command is implemented in its own
//! module for better organization and maintainability.

pub mod columns;
pub mod shared;
pub mod soccer;
pub mod weather;

use crate::Result;
use crate::app::services::spaced_parser::ParseStats;
use crate::cli::args::{Args, Commands};

/// Main command runner for the spaced report tool
///
/// This function dispatches to the appropriate subcommand handler based on
/// CLI args. Each command is implemented in its own module:
/// - `soccer`: league-table analysis (smallest goal difference)
/// - `weather`: temperature-log analysis (smallest max/min spread)
/// - `columns`: report inspection (inferred columns and parse statistics)
pub async fn run(args: Args) -> Result<ParseStats> {
    match args.get_command() {
        Commands::Soccer(soccer_args) => soccer::run_soccer(soccer_args).await,
        Commands::Weather(weather_args) => weather::run_weather(weather_args).await,
        Commands::Columns(columns_args) => columns::run_columns(columns_args).await,
    }
}
