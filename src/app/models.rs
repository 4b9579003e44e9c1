//! Data models for report analyses
//!
//! This module contains the domain records derived from parsed reports: one
//! per league-table row and one per temperature-log row.

use serde::{Deserialize, Serialize};

/// One team's row from a league-table report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    /// Team name with any rank prefix stripped (e.g. "Arsenal")
    pub name: String,

    /// Goals scored by the team
    pub goals_for: i32,

    /// Goals conceded by the team
    pub goals_against: i32,
}

impl TeamStanding {
    /// Absolute difference between goals scored and conceded
    pub fn goal_difference(&self) -> i32 {
        (self.goals_for - self.goals_against).abs()
    }
}

/// One day's readings from a temperature-log report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTemperature {
    /// Day number within the log
    pub day: u32,

    /// Maximum temperature recorded that day
    pub max_temperature: f64,

    /// Minimum temperature recorded that day
    pub min_temperature: f64,
}

impl DayTemperature {
    /// Spread between the day's maximum and minimum temperatures
    pub fn spread(&self) -> f64 {
        self.max_temperature - self.min_temperature
    }
}
