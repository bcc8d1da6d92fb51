//! Error types for rusty-calculator

use thiserror::Error;

/// Main error type for rusty-calculator
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Overflow: {0}")]
    Overflow(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for rusty-calculator operations
pub type Result<T> = std::result::Result<T, CalcError>;
