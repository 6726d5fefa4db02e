//! LearningEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Observer of the elimination loop.
///
/// Handlers only override the events they care about. Observation is
/// read-only: nothing a handler does can alter the learned boundaries.
pub trait LearningEventHandler<H, I>: Send + Sync {
    fn on_training_started(&self, _event: &TrainingStartedEvent) {}
    fn on_example_processed(&self, _event: &ExampleProcessedEvent<'_, H, I>) {}
    fn on_converged(&self, _event: &ConvergedEvent<'_, H>) {}
    fn on_training_complete(&self, _event: &TrainingCompleteEvent) {}
}
