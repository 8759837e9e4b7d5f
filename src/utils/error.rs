use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Catalog request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Data,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::Fetch(_) => ErrorCategory::Upstream,
            ServiceError::Decode(_) => ErrorCategory::Data,
            ServiceError::IoError(_) => ErrorCategory::System,
            ServiceError::ConfigError { .. }
            | ServiceError::InvalidConfigValueError { .. }
            | ServiceError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ServiceError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 上游暫時失敗，稍後重試可能成功
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ServiceError::Fetch(e) if e.is_timeout() => {
                "The catalog did not answer in time; raise --timeout-seconds or check the upstream service".to_string()
            }
            ServiceError::Fetch(e) if e.is_status() => {
                "The catalog answered with an error status; verify the catalog URL".to_string()
            }
            ServiceError::Fetch(_) => {
                "Check network connectivity and that the catalog URL is reachable".to_string()
            }
            ServiceError::Decode(_) => {
                "The catalog must return a JSON array of products with title, price, sizes and description".to_string()
            }
            ServiceError::IoError(_) => "Check that the file exists and is readable".to_string(),
            ServiceError::ConfigError { .. } => {
                "Fix the configuration file and restart the service".to_string()
            }
            ServiceError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            ServiceError::MissingConfigError { field } => {
                format!("Set '{}' on the command line or in the TOML configuration", field)
            }
            ServiceError::ProcessingError { .. } => {
                "Simplify the highlight terms and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Upstream => format!("Could not reach the product catalog: {}", self),
            ErrorCategory::Data => format!("The product catalog returned unexpected data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Processing => format!("Could not process the request: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
