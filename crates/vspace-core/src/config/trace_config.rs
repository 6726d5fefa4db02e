//! Step-trace configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the per-example trace.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TraceConfig {
    /// Emit every elimination step through `tracing`. Default: false.
    pub enabled: Option<bool>,
}

impl TraceConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }
}
