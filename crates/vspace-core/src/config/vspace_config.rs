//! Top-level vspace configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, LearningConfig, TraceConfig};
use crate::constants::{NULL_TOKEN, WILDCARD_TOKEN};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "vspace.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VSPACE_*`)
/// 2. Project config (`vspace.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VspaceConfig {
    pub learning: LearningConfig,
    pub classifier: ClassifierConfig,
    pub trace: TraceConfig,
}

impl VspaceConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &VspaceConfig) -> Result<(), ConfigError> {
        let markers = config.learning.effective_markers();
        if markers.positive.is_empty() || markers.negative.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "learning.positive_label/negative_label".to_string(),
                message: "label markers must not be empty".to_string(),
            });
        }
        if markers.positive == markers.negative {
            return Err(ConfigError::ValidationFailed {
                field: "learning.positive_label/negative_label".to_string(),
                message: "label markers must differ".to_string(),
            });
        }

        let values = config.learning.effective_attribute_values();
        for value in &values {
            if value.is_empty() || value == WILDCARD_TOKEN || value == NULL_TOKEN {
                return Err(ConfigError::InvalidValue {
                    field: "learning.attribute_values".to_string(),
                    message: format!("{value:?} is reserved or empty"),
                });
            }
        }
        let mut distinct = values.clone();
        distinct.sort();
        distinct.dedup();
        if distinct.len() != values.len() || distinct.len() < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "learning.attribute_values".to_string(),
                message: "needs at least two distinct values".to_string(),
            });
        }

        if let Some(threshold) = config.classifier.vote_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "classifier.vote_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut VspaceConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VspaceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut VspaceConfig, other: &VspaceConfig) {
        // Learning
        if other.learning.positive_label.is_some() {
            base.learning.positive_label = other.learning.positive_label.clone();
        }
        if other.learning.negative_label.is_some() {
            base.learning.negative_label = other.learning.negative_label.clone();
        }
        if !other.learning.attribute_values.is_empty() {
            base.learning.attribute_values = other.learning.attribute_values.clone();
        }
        if other.learning.stop_on_convergence.is_some() {
            base.learning.stop_on_convergence = other.learning.stop_on_convergence;
        }

        // Classifier
        if other.classifier.vote_threshold.is_some() {
            base.classifier.vote_threshold = other.classifier.vote_threshold;
        }

        // Trace
        if other.trace.enabled.is_some() {
            base.trace.enabled = other.trace.enabled;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VSPACE_LEARNING_POSITIVE_LABEL`, `VSPACE_TRACE_ENABLED`, etc.
    fn apply_env_overrides(config: &mut VspaceConfig) {
        if let Ok(val) = std::env::var("VSPACE_LEARNING_POSITIVE_LABEL") {
            config.learning.positive_label = Some(val);
        }
        if let Ok(val) = std::env::var("VSPACE_LEARNING_NEGATIVE_LABEL") {
            config.learning.negative_label = Some(val);
        }
        if let Ok(val) = std::env::var("VSPACE_LEARNING_STOP_ON_CONVERGENCE") {
            if let Ok(v) = val.parse::<bool>() {
                config.learning.stop_on_convergence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VSPACE_CLASSIFIER_VOTE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.classifier.vote_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("VSPACE_TRACE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.trace.enabled = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
