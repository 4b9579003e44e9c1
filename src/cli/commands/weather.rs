//! Weather command implementation for the spaced report CLI
//!
//! Parses a daily temperature log and prints the day whose maximum and
//! minimum temperatures are closest together.

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{create_spinner, setup_logging};
use crate::app::services::spaced_parser::{ParseStats, parse_file};
use crate::app::services::temperature_log::{daily_temperatures, min_spread_day};
use crate::cli::args::{OutputFormat, WeatherArgs};
use crate::{Error, Result};

/// Weather command runner
pub async fn run_weather(args: WeatherArgs) -> Result<ParseStats> {
    setup_logging(args.report.get_log_level())?;

    info!("Starting temperature-log analysis");
    debug!("Weather arguments: {:?}", args);

    args.report.validate()?;

    let spinner = args
        .report
        .show_progress()
        .then(|| create_spinner("Parsing temperature log"));

    let result = parse_file(&args.report.report_file).await?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let readings = daily_temperatures(&result.document);
    info!("Extracted {} daily readings", readings.len());

    let best = min_spread_day(&readings).ok_or_else(|| {
        Error::data_validation(format!(
            "No usable daily readings in {}",
            args.report.report_file.display()
        ))
    })?;

    match args.report.output_format {
        OutputFormat::Human => {
            println!(
                "Day {} (max {}, min {}, spread {})",
                best.day.to_string().green().bold(),
                best.max_temperature,
                best.min_temperature,
                best.spread()
            );
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "day": best,
                "spread": best.spread(),
                "stats": result.stats,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(result.stats)
}
