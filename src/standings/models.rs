use crate::constants::points;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// One fixture result: both team names and the goals each side scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    /// Creates a match record, rejecting negative goal counts and empty team names.
    ///
    /// Goal counts are taken as signed integers so callers holding raw data can
    /// hand them over unchanged and get an error instead of a silent
    /// wrap-around. The record has no position yet, so failures are
    /// `InvalidRecord`; [`MatchRecord::validate`] reports the index for
    /// records that sit in a sequence.
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        home_goals: i64,
        away_goals: i64,
    ) -> Result<Self, AppError> {
        let record = MatchRecord {
            home_team: home_team.into(),
            away_team: away_team.into(),
            home_goals: goal_count("homeGoals", home_goals).map_err(AppError::invalid_record)?,
            away_goals: goal_count("awayGoals", away_goals).map_err(AppError::invalid_record)?,
        };
        if let Some(reason) = record.name_problem() {
            return Err(AppError::invalid_record(reason));
        }
        Ok(record)
    }

    /// Checks the team names of a record at position `index` in its sequence.
    ///
    /// Goal counts are unsigned and need no further check.
    pub fn validate(&self, index: usize) -> Result<(), AppError> {
        match self.name_problem() {
            Some(reason) => Err(AppError::malformed_record(index, reason)),
            None => Ok(()),
        }
    }

    // Any non-empty string is a team name, whitespace included.
    fn name_problem(&self) -> Option<&'static str> {
        if self.home_team.is_empty() {
            Some("homeTeam must not be empty")
        } else if self.away_team.is_empty() {
            Some("awayTeam must not be empty")
        } else {
            None
        }
    }
}

/// Converts a signed goal count into the stored unsigned form, or returns
/// the reason it cannot be stored.
pub(crate) fn goal_count(field: &str, goals: i64) -> Result<u32, String> {
    u32::try_from(goals).map_err(|_| {
        if goals < 0 {
            format!("{field} must be non-negative, got {goals}")
        } else {
            format!("{field} is out of range, got {goals}")
        }
    })
}

/// Outcome of a match from one team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    /// Classifies a result. Equality is checked first, then a loss; anything else is a win.
    pub fn classify(goals_for: u32, goals_against: u32) -> Self {
        if goals_for == goals_against {
            Outcome::Draw
        } else if goals_for < goals_against {
            Outcome::Loss
        } else {
            Outcome::Win
        }
    }

    pub fn points(self) -> u64 {
        match self {
            Outcome::Win => points::WIN,
            Outcome::Draw => points::DRAW,
            Outcome::Loss => points::LOSS,
        }
    }
}

/// Accumulated season record for one team.
///
/// Counters only change through [`TeamStanding::record_result`], so
/// `played == wins + draws + losses` and `points == 3 * wins + draws` hold
/// for every value observable from outside this module.
///
/// Totals are `u64` over per-match `u32` goal counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    name: String,
    played: u64,
    wins: u64,
    draws: u64,
    losses: u64,
    goals_scored: u64,
    goals_against: u64,
    points: u64,
}

impl TeamStanding {
    pub fn new(name: impl Into<String>) -> Self {
        TeamStanding {
            name: name.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_scored: 0,
            goals_against: 0,
            points: 0,
        }
    }

    /// Folds one match result into this team's record.
    pub fn record_result(&mut self, goals_for: u32, goals_against: u32) -> Outcome {
        self.played += 1;
        self.goals_scored += u64::from(goals_for);
        self.goals_against += u64::from(goals_against);

        let outcome = Outcome::classify(goals_for, goals_against);
        match outcome {
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Win => self.wins += 1,
        }
        self.points += outcome.points();
        outcome
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn played(&self) -> u64 {
        self.played
    }

    pub fn wins(&self) -> u64 {
        self.wins
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn losses(&self) -> u64 {
        self.losses
    }

    pub fn goals_scored(&self) -> u64 {
        self.goals_scored
    }

    pub fn goals_against(&self) -> u64 {
        self.goals_against
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    /// Goals scored minus goals conceded
    pub fn goal_difference(&self) -> i128 {
        i128::from(self.goals_scored) - i128::from(self.goals_against)
    }
}
