//! Application-wide constants
//!
//! Column widths, file names and environment variable names live here so the
//! renderer, config and CLI agree on them.

/// Application name used for the config directory and log file
pub const APP_NAME: &str = "league_table";

/// Match file read when neither the command line nor the config names one
pub const DEFAULT_INPUT_FILE: &str = "22-23.json";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "league_table.log";

/// Default tracing directive for this crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "league_table=info";

/// Tracing directive used when `--debug` is given
pub const DEBUG_LOG_DIRECTIVE: &str = "league_table=debug";

/// Points awarded per result
pub mod points {
    pub const WIN: u64 = 3;
    pub const DRAW: u64 = 1;
    pub const LOSS: u64 = 0;
}

/// Fixed column widths of the standings table
pub mod table {
    pub const NAME_WIDTH: usize = 15;
    pub const WINS_WIDTH: usize = 3;
    pub const DRAWS_WIDTH: usize = 3;
    pub const LOSSES_WIDTH: usize = 3;
    pub const GOAL_DIFFERENCE_WIDTH: usize = 5;
    pub const POINTS_WIDTH: usize = 5;
}

/// Environment variables that override config file values
pub mod env_vars {
    pub const INPUT: &str = "LEAGUE_TABLE_INPUT";
    pub const LOG_FILE: &str = "LEAGUE_TABLE_LOG_FILE";
    pub const FORMAT: &str = "LEAGUE_TABLE_FORMAT";
}
