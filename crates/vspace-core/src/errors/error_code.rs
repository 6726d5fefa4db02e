//! VspaceErrorCode trait for stable, machine-readable error codes.

/// Trait for mapping vspace errors to stable error code strings.
/// Every error enum implements this so drivers can branch on the code
/// without matching on message text.
pub trait VspaceErrorCode {
    /// Returns the error code string (e.g., "INVALID_LABEL").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_LABEL: &str = "INVALID_LABEL";
pub const MALFORMED_INSTANCE: &str = "MALFORMED_INSTANCE";
pub const UNKNOWN_VALUE: &str = "UNKNOWN_VALUE";
pub const EMPTY_TRAINING_SET: &str = "EMPTY_TRAINING_SET";
pub const NON_SINGLETON_SPECIFIC: &str = "NON_SINGLETON_SPECIFIC";
pub const DATASET_PARSE: &str = "DATASET_PARSE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
