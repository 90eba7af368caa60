//! Error types and handling for PromptFn core

use thiserror::Error;

/// Result type alias for PromptFn operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for PromptFn core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Prompt template errors
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Completion backend errors
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    /// Function construction and invocation errors
    #[error("Function error: {0}")]
    Function(#[from] FunctionError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An empty or `null` YAML document produces no configuration at all.
    #[error("function configuration cannot be empty")]
    MissingConfiguration,

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

/// Prompt template errors
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error: {message}")]
    Syntax { message: String },

    #[error("Template render failed: {message}")]
    Render { message: String },

    #[error("Unsupported template format: {format}")]
    UnsupportedFormat { format: String },
}

/// Completion backend errors
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Streaming not supported by this function or client")]
    StreamingUnsupported,

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

/// Function construction and invocation errors
#[derive(Error, Debug)]
pub enum FunctionError {
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Function not found: {name}")]
    NotFound { name: String },
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
