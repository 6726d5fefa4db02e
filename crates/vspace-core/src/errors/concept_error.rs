//! Concept-learning errors.

use super::error_code::{self, VspaceErrorCode};

/// Errors raised while decoding training data, running candidate
/// elimination, or classifying against a version space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConceptError {
    #[error("Invalid label {label:?} on example {index}")]
    InvalidLabel { index: usize, label: String },

    #[error("Malformed instance: expected {expected} attributes, found {found}")]
    MalformedInstance { expected: usize, found: usize },

    #[error("Unknown value {value:?} for attribute {position}")]
    UnknownValue { position: usize, value: String },

    #[error("Training set is empty")]
    EmptyTrainingSet,

    #[error("Classification requires exactly one specific hypothesis, found {size}")]
    NonSingletonSpecific { size: usize },

    #[error("Dataset parse error: {message}")]
    DatasetParse { message: String },
}

/// Result alias used across the learner.
pub type ConceptResult<T> = Result<T, ConceptError>;

impl VspaceErrorCode for ConceptError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLabel { .. } => error_code::INVALID_LABEL,
            Self::MalformedInstance { .. } => error_code::MALFORMED_INSTANCE,
            Self::UnknownValue { .. } => error_code::UNKNOWN_VALUE,
            Self::EmptyTrainingSet => error_code::EMPTY_TRAINING_SET,
            Self::NonSingletonSpecific { .. } => error_code::NON_SINGLETON_SPECIFIC,
            Self::DatasetParse { .. } => error_code::DATASET_PARSE,
        }
    }
}
