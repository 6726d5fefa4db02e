//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use tracing::warn;

use super::handler::LearningEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
pub struct EventDispatcher<H, I> {
    handlers: Vec<Arc<dyn LearningEventHandler<H, I>>>,
}

impl<H, I> EventDispatcher<H, I> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn register(&mut self, handler: Arc<dyn LearningEventHandler<H, I>>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn LearningEventHandler<H, I>)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                warn!("learning event handler panicked; event dropped for that handler");
            }
        }
    }

    pub fn emit_training_started(&self, event: &TrainingStartedEvent) {
        self.emit(|h| h.on_training_started(event));
    }

    pub fn emit_example_processed(&self, event: &ExampleProcessedEvent<'_, H, I>) {
        self.emit(|h| h.on_example_processed(event));
    }

    pub fn emit_converged(&self, event: &ConvergedEvent<'_, H>) {
        self.emit(|h| h.on_converged(event));
    }

    pub fn emit_training_complete(&self, event: &TrainingCompleteEvent) {
        self.emit(|h| h.on_training_complete(event));
    }
}

impl<H, I> Default for EventDispatcher<H, I> {
    fn default() -> Self {
        Self::new()
    }
}
