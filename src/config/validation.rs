use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If a default input path is provided, it cannot be empty
/// - If a log file path is provided, it cannot be empty and must name a file
pub fn validate_config(
    default_input_path: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(input_path) = default_input_path
        && input_path.trim().is_empty()
    {
        return Err(AppError::config_error("Default input path cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.trim().is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if Path::new(log_path).file_name().is_none() {
            return Err(AppError::config_error(format!(
                "Log file path '{log_path}' does not name a file"
            )));
        }
    }

    Ok(())
}
