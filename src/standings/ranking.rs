use super::builder::Standings;
use super::models::TeamStanding;
use std::cmp::Ordering;

/// Orders standings by points, highest first.
///
/// Teams level on points are ordered by name ascending. This is a
/// presentation order only; no sporting tie-break (goal difference,
/// head-to-head) is applied.
pub fn rank(standings: &Standings) -> Vec<TeamStanding> {
    let mut ranked: Vec<TeamStanding> = standings.iter().cloned().collect();
    ranked.sort_by(compare_standings);
    ranked
}

fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| a.name().cmp(b.name()))
}
