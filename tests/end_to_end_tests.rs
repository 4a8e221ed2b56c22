use league_table::error::AppError;
use league_table::{OutputFormat, ingest, load_matches, rank, render};
use std::fs;
use tempfile::tempdir;

const SEASON_JSON: &str = r#"[
    {"homeTeam": "Arsenal", "awayTeam": "Crystal Palace", "homeGoals": 2, "awayGoals": 0},
    {"homeTeam": "Fulham", "awayTeam": "Liverpool", "homeGoals": 2, "awayGoals": 2},
    {"homeTeam": "Liverpool", "awayTeam": "Crystal Palace", "homeGoals": 1, "awayGoals": 1},
    {"homeTeam": "Arsenal", "awayTeam": "Fulham", "homeGoals": 2, "awayGoals": 1},
    {"homeTeam": "Crystal Palace", "awayTeam": "Fulham", "homeGoals": 0, "awayGoals": 3}
]"#;

fn build_from_file(contents: &str, format: OutputFormat) -> Result<String, AppError> {
    let dir = tempdir()?;
    let path = dir.path().join("22-23.json");
    fs::write(&path, contents)?;

    let matches = load_matches(&path)?;
    let standings = ingest(&matches)?;
    render(&rank(&standings), format)
}

#[test]
fn test_file_to_table() {
    let output = build_from_file(SEASON_JSON, OutputFormat::Table).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Name            W   D   L   GD    Pts  ");
    assert_eq!(lines[1], "Arsenal         2   0   0   3     6    ");
    assert_eq!(lines[2], "Fulham          1   1   1   2     4    ");
    assert_eq!(lines[3], "Liverpool       0   2   0   0     2    ");
    assert_eq!(lines[4], "Crystal Palace  0   1   2   -5    1    ");
}

#[test]
fn test_file_to_json() {
    let output = build_from_file(SEASON_JSON, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = value.as_array().unwrap();

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["name"], "Arsenal");
    assert_eq!(entries[0]["played"], 2);
    assert_eq!(entries[3]["name"], "Crystal Palace");
    assert_eq!(entries[3]["goal_difference"], -5);

    let total_played: u64 = entries
        .iter()
        .map(|e| e["played"].as_u64().unwrap())
        .sum();
    assert_eq!(total_played, 10);
}

#[test]
fn test_empty_file_gives_header_only() {
    let output = build_from_file("[]", OutputFormat::Table).unwrap();
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("Name"));

    let output = build_from_file("[]", OutputFormat::Json).unwrap();
    assert_eq!(output, "[]");
}

#[test]
fn test_malformed_record_produces_no_table() {
    let contents = r#"[
        {"homeTeam": "Arsenal", "awayTeam": "Fulham", "homeGoals": 2, "awayGoals": 1},
        {"homeTeam": "Fulham", "awayTeam": "Arsenal", "homeGoals": -1, "awayGoals": 0}
    ]"#;
    let result = build_from_file(contents, OutputFormat::Table);
    match result {
        Err(AppError::MalformedRecord { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("homeGoals"));
        }
        other => panic!("Expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn test_invalid_json_file() {
    let result = build_from_file("not json", OutputFormat::Table);
    assert!(matches!(result, Err(AppError::InputParse(_))));
    assert!(result.unwrap_err().is_input_error());
}
