//! Tipos de erro para ferrule-core

use std::collections::TryReserveError;

use thiserror::Error;

/// Resultado customizado para operações do ferrule
pub type FerruleResult<T> = Result<T, FerruleError>;

/// Erros que podem ocorrer nas operações do ferrule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FerruleError {
    /// Destination could not grow by `requested` elements
    #[error("Cannot reserve {requested} additional elements: {source}")]
    Reserve {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// Curve parameter out of its valid domain
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O while reading configuration
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed TOML
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<std::io::Error> for FerruleError {
    fn from(err: std::io::Error) -> Self {
        FerruleError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for FerruleError {
    fn from(err: toml::de::Error) -> Self {
        FerruleError::Parse(err.to_string())
    }
}
