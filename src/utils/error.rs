use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Could not open file: {path}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Io,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code used by the binary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl AdvisorError {
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        AdvisorError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::SourceUnavailable { .. } => ErrorCategory::Source,
            AdvisorError::IoError(_) => ErrorCategory::Io,
            AdvisorError::CsvError(_) | AdvisorError::SerializationError(_) => {
                ErrorCategory::Output
            }
            AdvisorError::ConfigError { .. }
            | AdvisorError::ConfigValidationError { .. }
            | AdvisorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Source => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdvisorError::SourceUnavailable { .. } => {
                "Check that the catalog file exists and is readable"
            }
            AdvisorError::IoError(_) => "Check that the terminal or pipe is still open",
            AdvisorError::CsvError(_) | AdvisorError::SerializationError(_) => {
                "Try a different --format or check that stdout is writable"
            }
            AdvisorError::ConfigError { .. } | AdvisorError::ConfigValidationError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            AdvisorError::InvalidConfigValueError { .. } => {
                "Fix the value named above in the config file or on the command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AdvisorError::SourceUnavailable { path, .. } => {
                format!("Error: Could not open file: {}", path)
            }
            AdvisorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
