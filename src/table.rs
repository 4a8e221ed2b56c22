//! Rendering ranked standings for output

use crate::constants::table::{
    DRAWS_WIDTH, GOAL_DIFFERENCE_WIDTH, LOSSES_WIDTH, NAME_WIDTH, POINTS_WIDTH, WINS_WIDTH,
};
use crate::error::AppError;
use crate::standings::TeamStanding;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the ranked standings are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-width text table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config_error(format!(
                "Unknown output format '{other}', expected 'table' or 'json'"
            ))),
        }
    }
}

/// Renders standings in the requested format.
pub fn render(ranked: &[TeamStanding], format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Table => Ok(render_table(ranked)),
        OutputFormat::Json => render_json(ranked),
    }
}

/// Renders the fixed-width standings table, header first, one line per team.
///
/// Every column is left-justified and separated by a single space. Names
/// wider than the name column push the rest of the row right rather than
/// being cut.
pub fn render_table(ranked: &[TeamStanding]) -> String {
    let mut out = String::new();
    push_row(&mut out, "Name", "W", "D", "L", "GD", "Pts");
    for team in ranked {
        push_row(
            &mut out,
            team.name(),
            &team.wins().to_string(),
            &team.draws().to_string(),
            &team.losses().to_string(),
            &team.goal_difference().to_string(),
            &team.points().to_string(),
        );
    }
    out
}

fn push_row(out: &mut String, name: &str, w: &str, d: &str, l: &str, gd: &str, pts: &str) {
    out.push_str(&format!(
        "{name:<NAME_WIDTH$} {w:<WINS_WIDTH$} {d:<DRAWS_WIDTH$} {l:<LOSSES_WIDTH$} \
         {gd:<GOAL_DIFFERENCE_WIDTH$} {pts:<POINTS_WIDTH$}\n"
    ));
}

#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    position: usize,
    name: &'a str,
    played: u64,
    wins: u64,
    draws: u64,
    losses: u64,
    goals_scored: u64,
    goals_against: u64,
    goal_difference: i128,
    points: u64,
}

/// Renders the ranked standings as a pretty JSON array with 1-based positions.
pub fn render_json(ranked: &[TeamStanding]) -> Result<String, AppError> {
    let entries: Vec<RankedEntry<'_>> = ranked
        .iter()
        .enumerate()
        .map(|(i, team)| RankedEntry {
            position: i + 1,
            name: team.name(),
            played: team.played(),
            wins: team.wins(),
            draws: team.draws(),
            losses: team.losses(),
            goals_scored: team.goals_scored(),
            goals_against: team.goals_against(),
            goal_difference: team.goal_difference(),
            points: team.points(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
