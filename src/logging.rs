use crate::cli::Args;
use league_table::config::Config;
use league_table::constants::{DEBUG_LOG_DIRECTIVE, DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use league_table::error::AppError;
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn env_filter(directive: &str) -> Result<EnvFilter, AppError> {
    let directive = directive
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Sets up logging configuration for the application.
///
/// - Always logs to a daily rolling file
/// - `--debug` also logs to stderr at debug level, leaving stdout for the table
/// - Creates log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args, config: &Config) -> Result<(String, WorkerGuard), AppError> {
    let custom_log_path = args.log_file.as_ref().or(config.log_file_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };
    let log_dir = if log_dir.is_empty() {
        ".".to_string()
    } else {
        log_dir
    };

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = if args.debug {
        DEBUG_LOG_DIRECTIVE
    } else {
        DEFAULT_LOG_DIRECTIVE
    };

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(env_filter(directive)?),
    );

    if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stderr)
                    .with_ansi(true)
                    .with_filter(env_filter(directive)?),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
