//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A level name that matches no canonical level
    #[error("Unknown log level: '{input}'")]
    UnknownLevel { input: String },

    /// A field value with no structured representation
    #[error("Field '{key}' cannot be serialized: {reason}")]
    UnrepresentableField { key: String, reason: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error with context
    #[error("IO error while {operation}: {source}")]
    IoOperation {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an unknown level error naming the offending input
    pub fn unknown_level(input: impl Into<String>) -> Self {
        LoggerError::UnknownLevel {
            input: input.into(),
        }
    }

    /// Create an unrepresentable field error
    pub fn unrepresentable(key: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::UnrepresentableField {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(operation: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
