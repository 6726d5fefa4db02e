//! Configuration system for vspace.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod classifier_config;
pub mod learning_config;
pub mod trace_config;
pub mod vspace_config;

pub use classifier_config::ClassifierConfig;
pub use learning_config::LearningConfig;
pub use trace_config::TraceConfig;
pub use vspace_config::VspaceConfig;
