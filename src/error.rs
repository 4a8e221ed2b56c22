use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Match data errors
    #[error("Malformed match record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    #[error("Invalid match record: {0}")]
    InvalidRecord(String),

    #[error("Failed to read match file '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse match file: {0}")]
    InputParse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a malformed record error for the record at `index`
    pub fn malformed_record(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Create an error for a record that is not part of a sequence
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecord(reason.into())
    }

    /// Create an input read error for the given path
    pub fn input_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Create an input parse error with context
    pub fn input_parse_error(msg: impl Into<String>) -> Self {
        Self::InputParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error was caused by the match data rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::MalformedRecord { .. }
                | AppError::InvalidRecord(_)
                | AppError::InputRead { .. }
                | AppError::InputParse(_)
        )
    }
}
