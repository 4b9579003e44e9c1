//! Integration tests for the full report-analysis pipeline
//!
//! These tests write realistic fixed-width report files to disk and run the
//! complete pipeline (file read, column inference, tokenization, domain
//! extraction, minimum search) against them.

use std::io::Write;

use spaced_report::app::services::league_table::{min_goal_difference, team_standings};
use spaced_report::app::services::spaced_parser::parse_file;
use spaced_report::app::services::temperature_log::{daily_temperatures, min_spread_day};
use tempfile::NamedTempFile;

const LEAGUE_REPORT: &str = "       Team            P     W    L   D    F      A     Pts
    1. Arsenal         38    26   9   3   79  -  36    87
    2. Liverpool       38    24   8   6   67  -  30    80
    3. Manchester_U    38    24   5   9   87  -  45    77

   -------------------------------------------------------
    4. Newcastle       38    21   8   9   74  -  52    71
    5. Leeds           38    18  12   8   53  -  37    66
";

const WEATHER_REPORT: &str = "  Dy MxT   MnT   AvT

   1  88    59    74
   2  79    63    71
   3  77    55    66
   4  77*   59    68
   9  86    32*   59
  mo  82.9  60.5  71.7
";

fn write_report(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp report");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp report");
    file
}

/// Test the complete league-table pipeline against a realistic report
///
/// Purpose: Validate end-to-end parsing and analysis with a report carrying
/// blank lines, a separator rule, and goal-continuation markers
/// Benefit: Ensures the pipeline answers the goal-difference query without
/// tripping over presentation noise
#[tokio::test]
async fn test_league_pipeline_end_to_end() {
    let file = write_report(LEAGUE_REPORT);

    let result = parse_file(file.path()).await.expect("Report should parse");

    assert_eq!(result.document.column_count(), 8);
    assert_eq!(result.stats.blank_lines_skipped, 1);
    // The separator rule is a data line, just an unusable one
    assert_eq!(result.stats.data_lines, 6);

    let standings = team_standings(&result.document).expect("Named columns should resolve");
    assert_eq!(standings.len(), 5);

    let best = min_goal_difference(&standings).expect("Standings should not be empty");
    // Differences: 43, 37, 42, 22, 16; Leeds wins
    assert_eq!(best.name, "Leeds");
    assert_eq!(best.goal_difference(), 16);
}

/// Test the complete temperature-log pipeline against a realistic report
///
/// Purpose: Validate end-to-end parsing and analysis with record markers,
/// a gap in day numbers, and a monthly summary row
/// Benefit: Ensures positional extraction and marker stripping survive
/// real-world report noise
#[tokio::test]
async fn test_weather_pipeline_end_to_end() {
    let file = write_report(WEATHER_REPORT);

    let result = parse_file(file.path()).await.expect("Report should parse");

    assert_eq!(result.document.column_count(), 4);
    assert_eq!(result.stats.blank_lines_skipped, 1);

    let readings = daily_temperatures(&result.document);
    // Five day rows; the "mo" summary row yields no reading
    assert_eq!(readings.len(), 5);

    let best = min_spread_day(&readings).expect("Readings should not be empty");
    // Spreads: 29, 16, 22, 18, 54; day 2 wins
    assert_eq!(best.day, 2);
    assert!((best.spread() - 16.0).abs() < f64::EPSILON);
}

/// Test that an empty report file fails with a missing-header error
#[tokio::test]
async fn test_empty_report_is_rejected() {
    let file = write_report("");

    let error = parse_file(file.path()).await.unwrap_err();

    assert!(matches!(
        error,
        spaced_report::Error::MissingHeader { .. }
    ));
}

/// Test that both analyses can run against the same parsed document
#[tokio::test]
async fn test_document_is_reusable_across_analyses() {
    let file = write_report(LEAGUE_REPORT);
    let result = parse_file(file.path()).await.expect("Report should parse");

    let first = team_standings(&result.document).expect("First pass should succeed");
    let second = team_standings(&result.document).expect("Second pass should succeed");

    assert_eq!(first, second);
}
