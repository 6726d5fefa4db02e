//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_VOTE_THRESHOLD;

/// Configuration for version-space voting.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Share of the enumerated version space that must match an instance for
    /// a positive vote. Default: 0.5.
    pub vote_threshold: Option<f64>,
}

impl ClassifierConfig {
    /// Returns the effective vote threshold, defaulting to 0.5.
    pub fn effective_vote_threshold(&self) -> f64 {
        self.vote_threshold.unwrap_or(DEFAULT_VOTE_THRESHOLD)
    }
}
