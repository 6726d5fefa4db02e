//! Boolean concept labels and their raw markers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_NEGATIVE_LABEL, DEFAULT_POSITIVE_LABEL};
use crate::errors::{ConceptError, ConceptResult};

/// Whether an instance belongs to the target concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("positive"),
            Self::Negative => f.write_str("negative"),
        }
    }
}

/// The two raw markers a training set uses for its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMarkers {
    pub positive: String,
    pub negative: String,
}

impl LabelMarkers {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    /// Returns `true` for the positive marker, `false` for the negative one.
    ///
    /// `index` only annotates the error raised for any other marker.
    pub fn is_positive(&self, index: usize, marker: &str) -> ConceptResult<bool> {
        if marker == self.positive {
            Ok(true)
        } else if marker == self.negative {
            Ok(false)
        } else {
            Err(ConceptError::InvalidLabel {
                index,
                label: marker.to_string(),
            })
        }
    }

    /// Decode a raw marker into a [`Label`].
    pub fn decode(&self, index: usize, marker: &str) -> ConceptResult<Label> {
        self.is_positive(index, marker).map(|positive| {
            if positive {
                Label::Positive
            } else {
                Label::Negative
            }
        })
    }
}

impl Default for LabelMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE_LABEL, DEFAULT_NEGATIVE_LABEL)
    }
}
