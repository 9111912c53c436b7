use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Malformed input at line {line_number}: {content:?}")]
    MalformedInput { line_number: usize, content: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Worker task failed: {message}")]
    TaskError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SentimentError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } | Self::MalformedInput { .. } => ErrorCategory::Input,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) | Self::TaskError { .. } => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 格式錯誤的行只會被略過
            Self::MalformedInput { .. } => ErrorSeverity::Low,
            Self::InvalidArgument { .. } => ErrorSeverity::High,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::Medium,
            Self::IoError(_) | Self::TaskError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => {
                "Check the cutoff values and make sure both corpora contain labeled reviews"
            }
            Self::MalformedInput { .. } => {
                "End each review line with a separator and a 0 (negative) or 1 (positive) label"
            }
            Self::IoError(_) => "Make sure the corpus files exist and are readable",
            Self::SerializationError(_) => "Retry without --json to get the plain text report",
            Self::ConfigValidationError { .. } => "Make sure the configuration file is valid TOML",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Fix the configuration value named in the error and run again"
            }
            Self::TaskError { .. } => "Run again with --workers 1 to score on a single thread",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => format!("Cannot build the model: {}", message),
            Self::MalformedInput { line_number, .. } => {
                format!("Line {} has no sentiment label", line_number)
            }
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::SerializationError(e) => format!("Could not write the report: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Configuration value {} is required", field),
            Self::TaskError { message } => format!("Scoring failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
