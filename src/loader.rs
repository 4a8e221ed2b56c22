//! Reading match results from a JSON season file
//!
//! The file holds a JSON array of objects with `homeTeam`, `awayTeam`,
//! `homeGoals` and `awayGoals` keys. Each record is checked field by field so
//! a bad record is reported by position and field name instead of as a
//! generic deserialization failure.

use crate::error::AppError;
use crate::standings::MatchRecord;
use crate::standings::models::goal_count;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Reads and parses the match file at `path`.
pub fn load_matches(path: impl AsRef<Path>) -> Result<Vec<MatchRecord>, AppError> {
    let path = path.as_ref();
    debug!("Reading match file {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::input_read(path.to_string_lossy(), e))?;
    let matches = parse_matches(&content)?;

    info!("Loaded {} matches from {}", matches.len(), path.display());
    Ok(matches)
}

/// Parses a JSON array of match objects.
///
/// Stops at the first malformed record.
pub fn parse_matches(json: &str) -> Result<Vec<MatchRecord>, AppError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| AppError::input_parse_error(format!("invalid JSON: {e}")))?;

    let Value::Array(items) = value else {
        return Err(AppError::input_parse_error(
            "expected a JSON array of match records",
        ));
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect()
}

fn parse_record(index: usize, item: &Value) -> Result<MatchRecord, AppError> {
    let Value::Object(fields) = item else {
        return Err(AppError::malformed_record(index, "record is not a JSON object"));
    };

    let record = MatchRecord {
        home_team: team_field(index, fields, "homeTeam")?,
        away_team: team_field(index, fields, "awayTeam")?,
        home_goals: goals_field(index, fields, "homeGoals")?,
        away_goals: goals_field(index, fields, "awayGoals")?,
    };
    record.validate(index)?;
    Ok(record)
}

fn required<'a>(
    index: usize,
    fields: &'a Map<String, Value>,
    field: &str,
) -> Result<&'a Value, AppError> {
    fields
        .get(field)
        .ok_or_else(|| AppError::malformed_record(index, format!("missing field {field}")))
}

fn team_field(index: usize, fields: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    match required(index, fields, field)? {
        Value::String(name) => Ok(name.clone()),
        other => Err(AppError::malformed_record(
            index,
            format!("{field} must be a string, got {other}"),
        )),
    }
}

fn goals_field(index: usize, fields: &Map<String, Value>, field: &str) -> Result<u32, AppError> {
    let value = required(index, fields, field)?;
    match value.as_i64() {
        Some(goals) => {
            goal_count(field, goals).map_err(|reason| AppError::malformed_record(index, reason))
        }
        None if value.is_u64() => Err(AppError::malformed_record(
            index,
            format!("{field} is out of range, got {value}"),
        )),
        None => Err(AppError::malformed_record(
            index,
            format!("{field} must be an integer, got {value}"),
        )),
    }
}
