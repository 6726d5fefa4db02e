//! Learning configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ATTRIBUTE_VALUES, DEFAULT_NEGATIVE_LABEL, DEFAULT_POSITIVE_LABEL};
use crate::types::LabelMarkers;

/// Configuration for the elimination engine and training-set decoding.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LearningConfig {
    /// Marker for positive examples. Default: "+".
    pub positive_label: Option<String>,
    /// Marker for negative examples. Default: "-".
    pub negative_label: Option<String>,
    /// Value domain applied to every attribute when no schema is given.
    /// Default: ["Y", "N"].
    #[serde(default)]
    pub attribute_values: Vec<String>,
    /// Stop as soon as the boundaries collapse. Default: true.
    pub stop_on_convergence: Option<bool>,
}

impl LearningConfig {
    /// Returns the effective label markers, defaulting to "+" / "-".
    pub fn effective_markers(&self) -> LabelMarkers {
        LabelMarkers::new(
            self.positive_label
                .clone()
                .unwrap_or_else(|| DEFAULT_POSITIVE_LABEL.to_string()),
            self.negative_label
                .clone()
                .unwrap_or_else(|| DEFAULT_NEGATIVE_LABEL.to_string()),
        )
    }

    /// Returns the effective attribute domain, defaulting to Y/N.
    pub fn effective_attribute_values(&self) -> Vec<String> {
        if self.attribute_values.is_empty() {
            DEFAULT_ATTRIBUTE_VALUES.iter().map(|v| v.to_string()).collect()
        } else {
            self.attribute_values.clone()
        }
    }

    /// Returns whether the engine halts on convergence, defaulting to true.
    pub fn effective_stop_on_convergence(&self) -> bool {
        self.stop_on_convergence.unwrap_or(true)
    }
}
