// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use league_table::config::Config;
use league_table::error::AppError;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    // Load config first to fail early if there's an issue
    let config = Config::load()?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args, &config)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return commands::handle_list_config_command();
    }

    if is_config_update(&args) {
        return commands::handle_config_update_command(&args, config);
    }

    let result = commands::handle_table_command(&args, &config);
    if let Err(e) = &result {
        tracing::error!("Failed to build standings: {e}");
    }
    result
}
