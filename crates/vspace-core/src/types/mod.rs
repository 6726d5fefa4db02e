//! Shared data types: labels and collection aliases.

pub mod collections;
pub mod label;

pub use collections::FxHashSet;
pub use label::{Label, LabelMarkers};
