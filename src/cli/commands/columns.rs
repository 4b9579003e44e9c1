//! Columns command implementation for the spaced report CLI
//!
//! Inspects a report without interpreting it: prints the columns inferred
//! from the header line, the parse statistics, and optionally every
//! tokenized data line. Useful for checking how a layout will be read
//! before wiring an analysis to it.

use colored::Colorize;
use tracing::{debug, info};

use super::shared::{create_spinner, setup_logging};
use crate::app::services::spaced_parser::{ParseResult, ParseStats, parse_file};
use crate::cli::args::{ColumnsArgs, OutputFormat};
use crate::Result;

/// Columns command runner
pub async fn run_columns(args: ColumnsArgs) -> Result<ParseStats> {
    setup_logging(args.report.get_log_level())?;

    info!("Inspecting report columns");
    debug!("Columns arguments: {:?}", args);

    args.report.validate()?;

    let spinner = args
        .report
        .show_progress()
        .then(|| create_spinner("Parsing report"));

    let result = parse_file(&args.report.report_file).await?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match args.report.output_format {
        OutputFormat::Human => print_human_report(&result, args.show_lines),
        OutputFormat::Json => print_json_report(&result, args.show_lines)?,
    }

    Ok(result.stats)
}

fn print_human_report(result: &ParseResult, show_lines: bool) {
    let document = &result.document;

    println!("{}", "Inferred columns".bold());
    println!("{:<20} {:>5} {:>5} {:>5}", "Name", "Start", "End", "Width");
    for item in document.header_items() {
        println!(
            "{:<20} {:>5} {:>5} {:>5}",
            item.name,
            item.start,
            item.end,
            item.width()
        );
    }

    println!();
    println!("{}", "Parse statistics".bold());
    println!("Data lines:          {}", result.stats.data_lines);
    println!("Blank lines skipped: {}", result.stats.blank_lines_skipped);
    println!("Short lines:         {}", result.stats.short_lines);

    if show_lines {
        println!();
        println!("{}", "Tokenized lines".bold());
        for (row, line) in document.lines().iter().enumerate() {
            println!("{:>4}: {:?}", row + 1, line.fields());
        }
    }
}

fn print_json_report(result: &ParseResult, show_lines: bool) -> Result<()> {
    let mut report = serde_json::json!({
        "columns": result.document.header_items(),
        "stats": result.stats,
    });

    if show_lines {
        let lines: Vec<_> = result
            .document
            .lines()
            .iter()
            .map(|line| line.fields())
            .collect();
        report["lines"] = serde_json::json!(lines);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
