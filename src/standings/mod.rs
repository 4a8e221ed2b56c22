//! League standings aggregation
//!
//! Match records are folded into one [`TeamStanding`] per team by
//! [`ingest`], then ordered by [`rank`].

pub mod builder;
pub mod models;
pub mod ranking;

pub use builder::{Standings, StandingsBuilder, ingest};
pub use models::{MatchRecord, Outcome, TeamStanding};
pub use ranking::rank;
