use std::fmt;

/// Errors raised while loading a player model or parsing caller input.
/// The head and hull computations themselves never fail.
#[derive(Debug)]
pub enum ModelError {
    /// Failed to parse a number or vector
    ParseError(String),
    /// Invalid argument provided by the caller
    InvalidInput(String),
    /// Player model failed validation
    InvalidConfig(String),
    /// Player model JSON could not be decoded
    ConfigFormat(serde_json::Error),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using ModelError
pub type ModelResult<T> = Result<T, ModelError>;

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ModelError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ModelError::InvalidConfig(msg) => write!(f, "Invalid player model: {}", msg),
            ModelError::ConfigFormat(err) => write!(f, "Player model format error: {}", err),
            ModelError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::ConfigFormat(err) => Some(err),
            ModelError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        ModelError::IoError(err)
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::ConfigFormat(err)
    }
}

impl From<std::num::ParseFloatError> for ModelError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ModelError::ParseError(err.to_string())
    }
}
