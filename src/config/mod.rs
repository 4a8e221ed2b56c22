use crate::constants::{DEFAULT_INPUT_FILE, LOG_FILE_NAME, env_vars};
use crate::error::AppError;
use crate::table::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Match file to read when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_input_path: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// A missing config file is not an error; defaults are used instead.
    /// Environment variables take precedence over config file values.
    ///
    /// # Environment Variables
    /// - `LEAGUE_TABLE_INPUT` - Override default input path
    /// - `LEAGUE_TABLE_LOG_FILE` - Override log file path
    /// - `LEAGUE_TABLE_FORMAT` - Override output format (`table` or `json`)
    pub fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path())
    }

    /// Loads configuration from `path` (or defaults if it does not exist),
    /// applies environment overrides and validates the result.
    pub fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path)?
        } else {
            debug!("No config file at {path}, using defaults");
            Config::default()
        };

        if let Ok(input_path) = std::env::var(env_vars::INPUT) {
            config.default_input_path = Some(input_path);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Ok(format) = std::env::var(env_vars::FORMAT) {
            config.output_format = format.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file without environment overrides.
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.default_input_path, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if needed.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// Match file to read: the explicit argument, then the configured
    /// default, then `22-23.json` in the working directory.
    pub fn resolve_input_path(&self, cli_input: Option<&str>) -> String {
        cli_input
            .map(str::to_string)
            .or_else(|| self.default_input_path.clone())
            .unwrap_or_else(|| DEFAULT_INPUT_FILE.to_string())
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load()?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Default Input File:");
        match &config.default_input_path {
            Some(path) => println!("{path}"),
            None => {
                println!("{DEFAULT_INPUT_FILE}");
                println!("(Default location)");
            }
        }
        println!("────────────────────────────────────");
        println!("Output Format:");
        println!("{:?}", config.output_format);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::INPUT);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::FORMAT);
        }
    }

    #[test]
    fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_content = r#"
default_input_path = "seasons/22-23.json"
log_file_path = "/custom/log/path.log"
output_format = "json"
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy()).unwrap();
        assert_eq!(
            config.default_input_path,
            Some("seasons/22-23.json".to_string())
        );
        assert_eq!(
            config.log_file_path,
            Some("/custom/log/path.log".to_string())
        );
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            default_input_path: Some("23-24.json".to_string()),
            log_file_path: None,
            output_format: OutputFormat::Json,
        };

        original.save_to_path(&config_path_str).unwrap();
        assert!(config_path.exists());

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("default_input_path = \"23-24.json\""));
        assert!(content.contains("output_format = \"json\""));
        // None values are skipped
        assert!(!content.contains("log_file_path"));

        let loaded = Config::load_from_path(&config_path_str).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        fs::write(&config_path, "default_input_path = \"unclosed\n[section").unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy());
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_config_unknown_output_format() {
        let result: Result<Config, _> = toml::from_str("output_format = \"csv\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    #[serial]
    fn test_load_with_overrides_missing_file_gives_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::load_with_overrides(&config_path.to_string_lossy()).unwrap();
        assert_eq!(config, Config::default());
        // Loading never creates the file
        assert!(!config_path.exists());
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "default_input_path = \"file.json\"\noutput_format = \"table\"\n",
        )
        .unwrap();

        unsafe {
            std::env::set_var(env_vars::INPUT, "env.json");
            std::env::set_var(env_vars::FORMAT, "json");
        }

        let config = Config::load_with_overrides(&config_path.to_string_lossy());
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.default_input_path, Some("env.json".to_string()));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    #[serial]
    fn test_environment_variable_invalid_format() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        unsafe {
            std::env::set_var(env_vars::FORMAT, "xml");
        }

        let result =
            Config::load_with_overrides(&temp_dir.path().join("config.toml").to_string_lossy());
        clear_env();

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_config_validation() {
        let valid = Config {
            default_input_path: Some("22-23.json".to_string()),
            log_file_path: Some("/tmp/league_table.log".to_string()),
            output_format: OutputFormat::Table,
        };
        assert!(valid.validate().is_ok());

        let invalid = Config {
            default_input_path: Some(String::new()),
            ..Config::default()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_resolve_input_path_precedence() {
        let config = Config {
            default_input_path: Some("configured.json".to_string()),
            ..Config::default()
        };
        assert_eq!(config.resolve_input_path(Some("cli.json")), "cli.json");
        assert_eq!(config.resolve_input_path(None), "configured.json");
        assert_eq!(
            Config::default().resolve_input_path(None),
            DEFAULT_INPUT_FILE
        );
    }

    #[test]
    fn test_get_paths() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("league_table"));
        assert!(config_path.ends_with("config.toml"));

        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("league_table"));
        assert!(log_dir_path.ends_with("logs"));
    }
}
