use super::models::{MatchRecord, TeamStanding};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::collections::btree_map;
use tracing::{debug, info};

/// Team name to standing mapping produced by ingestion.
///
/// Owns every `TeamStanding`; entries are created on first sight of a team
/// and never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    teams: BTreeMap<String, TeamStanding>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, team: &str) -> Option<&TeamStanding> {
        self.teams.get(team)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.contains_key(team)
    }

    /// Iterates standings ordered by team name
    pub fn iter(&self) -> btree_map::Values<'_, String, TeamStanding> {
        self.teams.values()
    }

    /// Sum of games played over all teams, twice the number of matches
    pub fn total_played(&self) -> u64 {
        self.teams.values().map(TeamStanding::played).sum()
    }

    fn entry(&mut self, team: &str) -> &mut TeamStanding {
        self.teams
            .entry(team.to_string())
            .or_insert_with(|| TeamStanding::new(team))
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = &'a TeamStanding;
    type IntoIter = btree_map::Values<'a, String, TeamStanding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Folds match records into a [`Standings`] mapping.
#[derive(Debug, Default)]
pub struct StandingsBuilder {
    standings: Standings,
    matches: usize,
}

impl StandingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and applies one match to both teams.
    ///
    /// Nothing is mutated when the record is malformed. `matches_seen` is used
    /// as the record index in the error.
    pub fn add_match(&mut self, record: &MatchRecord) -> Result<(), AppError> {
        record.validate(self.matches)?;
        self.apply(record);
        Ok(())
    }

    /// Number of matches applied so far
    pub fn matches_seen(&self) -> usize {
        self.matches
    }

    pub fn finish(self) -> Standings {
        info!(
            "Built standings for {} teams from {} matches",
            self.standings.len(),
            self.matches
        );
        for team in self.standings.iter() {
            debug!("{}: {} games played", team.name(), team.played());
        }
        self.standings
    }

    fn apply(&mut self, record: &MatchRecord) {
        self.standings
            .entry(&record.home_team)
            .record_result(record.home_goals, record.away_goals);
        self.standings
            .entry(&record.away_team)
            .record_result(record.away_goals, record.home_goals);
        self.matches += 1;
    }
}

/// Builds standings from a complete match list.
///
/// Every record is validated before any is applied, so a malformed record
/// anywhere in `matches` yields an error and no standings at all.
pub fn ingest(matches: &[MatchRecord]) -> Result<Standings, AppError> {
    for (index, record) in matches.iter().enumerate() {
        record.validate(index)?;
    }

    let mut builder = StandingsBuilder::new();
    for record in matches {
        builder.apply(record);
    }
    Ok(builder.finish())
}
