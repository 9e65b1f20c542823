//! Error types for carousel configuration and action decoding.
//!
//! Layout transitions themselves never fail; these cover the recoverable
//! edges around them.

use thiserror::Error;

/// Main carousel error type
#[derive(Debug, Error)]
pub enum CarouselError {
    /// An option was outside its accepted range
    #[error("Invalid option `{field}`: {reason}")]
    InvalidOption {
        /// Name of the offending option
        field: &'static str,
        /// Human readable explanation
        reason: String,
    },

    /// Options could not be parsed from TOML
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// An action name did not match any known action kind
    #[error("Unknown action kind: {0}")]
    UnknownAction(String),
}

impl CarouselError {
    pub(crate) fn invalid(
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for fallible carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;
