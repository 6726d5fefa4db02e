//! Error handling for vspace.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod concept_error;
pub mod config_error;
pub mod error_code;

pub use concept_error::{ConceptError, ConceptResult};
pub use config_error::ConfigError;
pub use error_code::VspaceErrorCode;
