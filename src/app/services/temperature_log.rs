//! Temperature-log analysis over parsed reports
//!
//! Interprets a parsed report as a daily temperature log with a fixed
//! positional layout: day number, maximum, minimum. Each data line becomes a
//! [`DayTemperature`], and the day with the smallest max/min spread is the
//! query result.

use tracing::debug;

use crate::app::models::DayTemperature;
use crate::app::services::field_parsers::{parse_day_number, parse_temperature};
use crate::app::services::spaced_parser::{LineData, SpacedDocument};
use crate::constants::{
    DAY_COLUMN_INDEX, MAX_TEMPERATURE_COLUMN_INDEX, MIN_TEMPERATURE_COLUMN_INDEX,
};

/// Extract one reading per usable data line.
///
/// Rows whose day field is not a number (monthly summary rows) or whose
/// temperature fields do not parse are skipped with a debug note.
pub fn daily_temperatures(document: &SpacedDocument) -> Vec<DayTemperature> {
    document
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(row, line)| {
            let reading = reading_from_line(line);
            if reading.is_none() {
                debug!("Skipped temperature row {}: no usable reading", row + 1);
            }
            reading
        })
        .collect()
}

/// The day whose maximum and minimum temperatures are closest together
pub fn min_spread_day(readings: &[DayTemperature]) -> Option<&DayTemperature> {
    readings
        .iter()
        .min_by(|a, b| a.spread().total_cmp(&b.spread()))
}

fn reading_from_line(line: &LineData) -> Option<DayTemperature> {
    let day = parse_day_number(line.get(DAY_COLUMN_INDEX)?)?;
    let max_temperature = parse_temperature(line.get(MAX_TEMPERATURE_COLUMN_INDEX)?).ok()?;
    let min_temperature = parse_temperature(line.get(MIN_TEMPERATURE_COLUMN_INDEX)?).ok()?;

    Some(DayTemperature {
        day,
        max_temperature,
        min_temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::spaced_parser::parse_str;

    const WEATHER_REPORT: &str = "  Dy MxT   MnT   AvT

   1  88    59    74
   2  79    63    71
   3  30*   12    21
  mo  82.9  60.5  71.7
";

    #[test]
    fn test_daily_temperatures_extraction() {
        let result = parse_str(WEATHER_REPORT).unwrap();
        let readings = daily_temperatures(&result.document);

        assert_eq!(readings.len(), 3);
        assert_eq!(readings[0].day, 1);
        assert!((readings[0].max_temperature - 88.0).abs() < f64::EPSILON);
        assert!((readings[0].min_temperature - 59.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_marker_is_stripped() {
        let result = parse_str(WEATHER_REPORT).unwrap();
        let readings = daily_temperatures(&result.document);

        // Day 3 carries a "30*" record maximum
        assert_eq!(readings[2].day, 3);
        assert!((readings[2].max_temperature - 30.0).abs() < f64::EPSILON);
        assert!((readings[2].min_temperature - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_row_is_skipped() {
        let result = parse_str(WEATHER_REPORT).unwrap();
        let readings = daily_temperatures(&result.document);

        // The trailing "mo" row has no day number and yields no reading
        assert!(readings.iter().all(|reading| reading.day <= 3));
    }

    #[test]
    fn test_min_spread_day() {
        let result = parse_str(WEATHER_REPORT).unwrap();
        let readings = daily_temperatures(&result.document);
        let best = min_spread_day(&readings).unwrap();

        // Spreads are 29, 16, and 18; day 2 wins
        assert_eq!(best.day, 2);
        assert!((best.spread() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_min_spread_empty() {
        assert!(min_spread_day(&[]).is_none());
    }

    #[test]
    fn test_minimal_positional_report() {
        let result = parse_str("Day Max Min\n1   30*  12\n").unwrap();
        let readings = daily_temperatures(&result.document);

        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].day, 1);
        assert!((readings[0].max_temperature - 30.0).abs() < f64::EPSILON);
        assert!((readings[0].min_temperature - 12.0).abs() < f64::EPSILON);
    }
}
