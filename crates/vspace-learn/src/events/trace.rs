//! TracingHandler: writes every elimination step to `tracing`.

use std::fmt::Debug;

use tracing::{debug, info};

use super::handler::LearningEventHandler;
use super::types::*;

/// Emits the per-step trace (example, S, G) as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl<H: Debug, I: Debug> LearningEventHandler<H, I> for TracingHandler {
    fn on_training_started(&self, event: &TrainingStartedEvent) {
        info!(
            example_count = event.example_count,
            arity = event.arity,
            "candidate elimination started"
        );
    }

    fn on_example_processed(&self, event: &ExampleProcessedEvent<'_, H, I>) {
        debug!(
            example_index = event.index,
            instance = ?event.instance,
            label = %event.label,
            specific = ?event.specific,
            general = ?event.general,
            "example processed"
        );
    }

    fn on_converged(&self, event: &ConvergedEvent<'_, H>) {
        info!(example_index = event.index, concept = ?event.concept, "version space converged");
    }

    fn on_training_complete(&self, event: &TrainingCompleteEvent) {
        info!(
            examples_processed = event.examples_processed,
            converged = event.converged,
            specific_size = event.specific_size,
            general_size = event.general_size,
            "candidate elimination finished"
        );
    }
}
