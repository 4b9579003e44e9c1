//! League-table analysis over parsed reports
//!
//! Interprets a parsed report as a soccer league table: the "Team", "F"
//! (goals for), and "A" (goals against) columns are located by name, each
//! data line becomes a [`TeamStanding`], and the team with the smallest
//! absolute goal difference is the query result.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::app::models::TeamStanding;
use crate::app::services::field_parsers::parse_goal_count;
use crate::app::services::spaced_parser::{LineData, SpacedDocument};
use crate::constants::columns;
use crate::Result;

/// Rank prefix printed ahead of each team name (e.g. "15. Everton")
static RANK_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("rank prefix pattern is valid"));

/// Extract one standing per usable data line.
///
/// The named columns must exist in the header ([`crate::Error::ColumnNotFound`]
/// otherwise). Lines that are too short to reach every needed column, or
/// whose goal counts do not parse (separator rules, stray text), are skipped
/// with a debug note rather than failing the whole run.
pub fn team_standings(document: &SpacedDocument) -> Result<Vec<TeamStanding>> {
    let team_index = document.column_index(columns::TEAM)?;
    let for_index = document.column_index(columns::GOALS_FOR)?;
    let against_index = document.column_index(columns::GOALS_AGAINST)?;

    let standings = document
        .lines()
        .iter()
        .enumerate()
        .filter_map(|(row, line)| {
            let standing = standing_from_line(line, team_index, for_index, against_index);
            if standing.is_none() {
                debug!("Skipped league row {}: no usable standing", row + 1);
            }
            standing
        })
        .collect();

    Ok(standings)
}

/// The team whose goals scored and conceded are closest together
pub fn min_goal_difference(standings: &[TeamStanding]) -> Option<&TeamStanding> {
    standings.iter().min_by_key(|team| team.goal_difference())
}

fn standing_from_line(
    line: &LineData,
    team_index: usize,
    for_index: usize,
    against_index: usize,
) -> Option<TeamStanding> {
    let raw_name = line.get(team_index)?;
    let goals_for = parse_goal_count(line.get(for_index)?).ok()?;
    let goals_against = parse_goal_count(line.get(against_index)?).ok()?;

    let name = RANK_PREFIX.replace(raw_name, "").trim().to_string();
    if name.is_empty() {
        return None;
    }

    Some(TeamStanding {
        name,
        goals_for,
        goals_against,
    })
}
