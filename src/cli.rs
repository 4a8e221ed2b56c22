use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use league_table::OutputFormat;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the arguments ask for a configuration change
/// instead of building a table.
pub fn is_config_update(args: &Args) -> bool {
    args.new_input_path.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Football league standings table
///
/// Reads a season's match results from a JSON file and prints the league
/// table ordered by points. Teams level on points are listed by name.
///
/// The match file is a JSON array of objects with `homeTeam`, `awayTeam`,
/// `homeGoals` and `awayGoals` fields.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Match results file. Defaults to the configured input file, or 22-23.json.
    pub input: Option<String>,

    /// Output format. Defaults to the configured format, or a text table.
    #[arg(long = "format", short = 'f', value_enum, help_heading = "Display Options")]
    pub format: Option<OutputFormat>,

    /// Set the default match results file in config.
    #[arg(long = "set-input", help_heading = "Configuration")]
    pub new_input_path: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Log debug details, including games played per team, to stderr as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
