//! Configuration errors.

use super::error_code::{self, VspaceErrorCode};

/// Errors raised while loading or validating `vspace.toml` and the
/// `VSPACE_*` overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The project config exists but could not be read.
    #[error("vspace config {path} could not be read")]
    FileNotFound { path: String },

    #[error("Invalid TOML in vspace config {path}: {message}")]
    ParseError { path: String, message: String },

    /// A cross-field rule failed, e.g. identical label markers.
    #[error("vspace setting {field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    /// A single value is out of range or uses a reserved token.
    #[error("Invalid value for vspace setting {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl VspaceErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
