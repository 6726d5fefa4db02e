//! # vspace-learn
//!
//! Candidate-elimination concept learning: a representation-agnostic
//! elimination engine driving the S/G boundary updates, a conjunctive
//! hypothesis space supplying the primitives, and a classifier that queries
//! the resulting version space.
//!
//! Pipeline: training set → [`EliminationEngine`] → [`VersionSpace`] →
//! [`Classifier`] → [`Classification`].

pub mod boundary;
pub mod classifier;
pub mod conjunctive;
pub mod dataset;
pub mod engine;
pub mod events;
pub mod model;
pub mod space;

pub use boundary::{Boundary, VersionSpace};
pub use classifier::{Classification, Classifier, Evidence};
pub use conjunctive::{AttributeDomain, AttributeSchema, ConjunctiveSpace, Factor, Hypothesis, Instance};
pub use dataset::{Example, RawExample, TrainingSet};
pub use engine::{EliminationEngine, TrainingOutcome};
pub use events::{EventDispatcher, LearningEventHandler, TracingHandler};
pub use model::{build_model, build_model_with_schema};
pub use space::HypothesisSpace;
