//! Error types for Sleet

use thiserror::Error;

/// The main error type for Sleet operations
#[derive(Debug, Error)]
pub enum SleetError {
    #[error("Drawable not found: {0}")]
    DrawableNotFound(String),

    #[error("Invalid scroll domain: {0}")]
    InvalidDomain(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Sleet operations
pub type Result<T> = std::result::Result<T, SleetError>;

impl From<toml::de::Error> for SleetError {
    fn from(err: toml::de::Error) -> Self {
        SleetError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for SleetError {
    fn from(err: toml::ser::Error) -> Self {
        SleetError::TomlSerError(err.to_string())
    }
}
