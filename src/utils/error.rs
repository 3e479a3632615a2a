use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid request body: {message}")]
    InvalidRequestBody { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Request,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DirectoryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::ApiError(_) => ErrorCategory::Network,
            DirectoryError::CsvError(_)
            | DirectoryError::SerializationError(_)
            | DirectoryError::ValidationError { .. } => ErrorCategory::Data,
            DirectoryError::ConfigError { .. }
            | DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DirectoryError::InvalidRequestBody { .. } => ErrorCategory::Request,
            DirectoryError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the data source URL is reachable and returns JSON",
            ErrorCategory::Data => {
                "Check the dataset: every advocate needs a name and a 10-digit phone number"
            }
            ErrorCategory::Configuration => "Check the configuration file and command line flags",
            ErrorCategory::Request => "Send a JSON object body with the documented search fields",
            ErrorCategory::System => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::ApiError(_) => "Could not download the advocate dataset".to_string(),
            DirectoryError::CsvError(_) | DirectoryError::SerializationError(_) => {
                "The advocate dataset could not be parsed".to_string()
            }
            DirectoryError::IoError(e) => format!("Could not read a file: {}", e),
            DirectoryError::InvalidRequestBody { .. } => "Invalid request body".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
