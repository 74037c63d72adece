//! Error types for style loading.
//!
//! The button itself never fails; only reading and validating style
//! descriptions can.

use std::path::PathBuf;

/// Result type alias for fallible tabstrip operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or applying a bar button style.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read style file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("Invalid style description: {0}")]
    Toml(#[from] toml::de::Error),

    /// A color string that is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("Invalid color '{value}' for '{property}'")]
    InvalidColor { property: String, value: String },

    /// Any other out-of-range value.
    #[error("Invalid value for property '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a color error.
    pub fn invalid_color(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            property: property.into(),
            value: value.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
