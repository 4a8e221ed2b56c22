use crate::cli::Args;
use league_table::config::Config;
use league_table::error::AppError;
use league_table::loader::load_matches;
use league_table::standings::{ingest, rank};
use league_table::table::render;
use tracing::info;

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", league_table::NAME, league_table::VERSION);
}

/// Handles the --list-config command.
pub fn handle_list_config_command() -> Result<(), AppError> {
    Config::display()
}

/// Handles configuration update commands (--set-input, --set-log-file, --clear-log-file).
pub fn handle_config_update_command(args: &Args, mut config: Config) -> Result<(), AppError> {
    if let Some(new_input) = &args.new_input_path {
        config.default_input_path = Some(new_input.clone());
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save()?;
    println!("Config updated successfully!");

    Ok(())
}

/// Loads the match file, builds the standings and prints the ranked table.
pub fn handle_table_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let input_path = config.resolve_input_path(args.input.as_deref());
    let format = args.format.unwrap_or(config.output_format);

    let matches = load_matches(&input_path)?;
    let standings = ingest(&matches)?;
    let ranked = rank(&standings);
    info!("Ranked {} teams from {input_path}", ranked.len());

    print!("{}", render(&ranked, format)?);
    Ok(())
}
