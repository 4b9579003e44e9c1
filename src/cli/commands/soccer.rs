//! Soccer command implementation for the spaced report CLI
//!
//! Parses a league-table report and prints the team whose goals scored and
//! conceded are closest together.

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{create_spinner, setup_logging};
use crate::app::services::league_table::{min_goal_difference, team_standings};
use crate::app::services::spaced_parser::{ParseStats, parse_file};
use crate::cli::args::{OutputFormat, SoccerArgs};
use crate::{Error, Result};

/// Soccer command runner
pub async fn run_soccer(args: SoccerArgs) -> Result<ParseStats> {
    setup_logging(args.report.get_log_level())?;

    info!("Starting league-table analysis");
    debug!("Soccer arguments: {:?}", args);

    args.report.validate()?;

    let spinner = args
        .report
        .show_progress()
        .then(|| create_spinner("Parsing league table"));

    let result = parse_file(&args.report.report_file).await?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let standings = team_standings(&result.document)?;
    info!("Extracted {} team standings", standings.len());

    let best = min_goal_difference(&standings).ok_or_else(|| {
        Error::data_validation(format!(
            "No usable team rows in {}",
            args.report.report_file.display()
        ))
    })?;

    match args.report.output_format {
        OutputFormat::Human => {
            println!(
                "{} (scored {}, conceded {}, difference {})",
                best.name.green().bold(),
                best.goals_for,
                best.goals_against,
                best.goal_difference()
            );
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "team": best,
                "goal_difference": best.goal_difference(),
                "stats": result.stats,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(result.stats)
}
