use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Socket error: {0}")]
    SocketError(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("API returned status {status} for {endpoint}")]
    ApiStatusError { endpoint: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
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

impl ChatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChatError::ApiError(_)
            | ChatError::SocketError(_)
            | ChatError::ApiStatusError { .. } => ErrorCategory::Network,
            ChatError::ConfigError { .. }
            | ChatError::InvalidConfigValueError { .. }
            | ChatError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ChatError::SerializationError(_) | ChatError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
            ChatError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChatError::ApiError(_) => {
                "Check that the chat server is running and the API base URL points at it"
            }
            ChatError::SocketError(_) => {
                "Check that the socket endpoint is reachable; the mirror does not reconnect on its own"
            }
            ChatError::ApiStatusError { .. } => {
                "Inspect the server logs for the failing endpoint"
            }
            ChatError::IoError(_) => "Check file paths and permissions",
            ChatError::SerializationError(_) => {
                "The payload did not match the expected message shape; check server and client versions"
            }
            ChatError::ConfigError { .. } | ChatError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and run again"
            }
            ChatError::MissingConfigError { .. } => {
                "Add the missing field to the configuration file"
            }
            ChatError::ProcessingError { .. } => "Run with --verbose for more detail",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChatError::ApiError(e) => format!("Could not reach the chat API: {}", e),
            ChatError::SocketError(e) => format!("The live socket failed: {}", e),
            ChatError::ApiStatusError { endpoint, status } => {
                format!("The chat server rejected {} with status {}", endpoint, status)
            }
            ChatError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChatError>;
