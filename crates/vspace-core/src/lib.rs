//! # vspace-core
//!
//! Shared foundation for the vspace concept learner: error taxonomy, labels,
//! layered configuration, tracing setup and collection aliases.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::VspaceConfig;
pub use errors::{ConceptError, ConceptResult, ConfigError, VspaceErrorCode};
pub use types::label::{Label, LabelMarkers};
