//! Football League Standings Library
//!
//! This library turns a season's match results into a league table: games
//! played, wins, draws, losses, goal difference and points, ordered by points.
//!
//! # Examples
//!
//! ```rust
//! use league_table::error::AppError;
//! use league_table::loader::parse_matches;
//! use league_table::standings::{ingest, rank};
//! use league_table::table::render_table;
//!
//! fn main() -> Result<(), AppError> {
//!     let matches = parse_matches(
//!         r#"[{"homeTeam": "A", "awayTeam": "B", "homeGoals": 2, "awayGoals": 1}]"#,
//!     )?;
//!
//!     let standings = ingest(&matches)?;
//!     let ranked = rank(&standings);
//!
//!     print!("{}", render_table(&ranked));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod standings;
pub mod table;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use loader::{load_matches, parse_matches};
pub use standings::{MatchRecord, Standings, StandingsBuilder, TeamStanding, ingest, rank};
pub use table::{OutputFormat, render, render_json, render_table};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
