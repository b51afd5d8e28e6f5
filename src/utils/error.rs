use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Artifact '{artifact}' is invalid: {message}")]
    ArtifactError { artifact: String, message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Classification failed: {message}")]
    ClassificationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Storage,
    Artifact,
    Input,
    Model,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SentimentError {
    pub fn artifact(artifact: &str, message: impl Into<String>) -> Self {
        Self::ArtifactError {
            artifact: artifact.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::IoError(_) => ErrorCategory::Storage,
            Self::ArtifactError { .. } | Self::SerializationError(_) => ErrorCategory::Artifact,
            Self::CsvError(_) | Self::ValidationError { .. } => ErrorCategory::Input,
            Self::ClassificationError { .. } => ErrorCategory::Model,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路問題通常可以重試
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::CsvError(_) | Self::ValidationError { .. } => ErrorSeverity::High,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::ClassificationError { .. } => ErrorSeverity::High,
            Self::ArtifactError { .. } | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::HttpError(e) => format!("Could not reach the artifact server: {}", e),
            Self::CsvError(e) => format!("The CSV file could not be processed: {}", e),
            Self::SerializationError(e) => format!("A model artifact is not valid JSON: {}", e),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => format!("Setting '{}' is required", field),
            Self::ArtifactError { artifact, message } => {
                format!("The {} artifact cannot be used: {}", artifact, message)
            }
            Self::ValidationError { message } => format!("Invalid input: {}", message),
            Self::ClassificationError { message } => {
                format!("The classifier could not score this text: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check sentiment.toml and the command-line flags",
            ErrorCategory::Network => "Check the artifact URL and your connection, then retry",
            ErrorCategory::Storage => "Check that the path exists and is readable/writable",
            ErrorCategory::Artifact => {
                "Re-export the vectorizer and model together from the same training run"
            }
            ErrorCategory::Input => "Check the input file format and the text column name",
            ErrorCategory::Model => "Verify the model artifact matches the vectorizer",
        }
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
