//! Entry points: train on a training set and return a ready classifier.

use std::sync::Arc;

use vspace_core::config::VspaceConfig;
use vspace_core::errors::{ConceptError, ConceptResult};

use crate::classifier::Classifier;
use crate::conjunctive::{AttributeSchema, ConjunctiveSpace};
use crate::dataset::TrainingSet;
use crate::engine::EliminationEngine;
use crate::events::TracingHandler;

/// Train a conjunctive model whose attributes all share
/// `learning.attribute_values` (Y/N by default).
///
/// Any value outside that domain, in the training set or in a later
/// `classify` query, fails with [`ConceptError::UnknownValue`]. Datasets with
/// other vocabularies must set `attribute_values` or go through
/// [`build_model_with_schema`], e.g. with [`AttributeSchema::infer`].
pub fn build_model(
    training_set: &TrainingSet,
    config: &VspaceConfig,
) -> ConceptResult<Classifier<ConjunctiveSpace>> {
    let arity = training_set.arity().ok_or(ConceptError::EmptyTrainingSet)?;
    let schema = AttributeSchema::uniform(arity, &config.learning.effective_attribute_values());
    build_model_with_schema(training_set, schema, config)
}

/// Train a conjunctive model over an explicit attribute schema.
pub fn build_model_with_schema(
    training_set: &TrainingSet,
    schema: AttributeSchema,
    config: &VspaceConfig,
) -> ConceptResult<Classifier<ConjunctiveSpace>> {
    let mut engine =
        EliminationEngine::with_config(ConjunctiveSpace::new(schema), &config.learning);
    if config.trace.effective_enabled() {
        engine.register_handler(Arc::new(TracingHandler));
    }

    let outcome = engine.run(training_set.examples())?;
    Classifier::new(engine.into_space(), outcome.version_space, &config.classifier)
}
