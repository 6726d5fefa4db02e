//! Event payload types for the elimination loop.

use vspace_core::types::Label;

use crate::boundary::Boundary;

/// Payload for `on_training_started`.
#[derive(Debug, Clone)]
pub struct TrainingStartedEvent {
    pub example_count: usize,
    pub arity: usize,
}

/// Payload for `on_example_processed`: the boundaries right after one update.
#[derive(Debug)]
pub struct ExampleProcessedEvent<'a, H, I> {
    pub index: usize,
    pub instance: &'a I,
    pub label: Label,
    pub specific: &'a Boundary<H>,
    pub general: &'a Boundary<H>,
}

/// Payload for `on_converged`.
#[derive(Debug)]
pub struct ConvergedEvent<'a, H> {
    pub index: usize,
    pub concept: &'a Boundary<H>,
}

/// Payload for `on_training_complete`.
#[derive(Debug, Clone)]
pub struct TrainingCompleteEvent {
    pub examples_processed: usize,
    pub converged: bool,
    pub specific_size: usize,
    pub general_size: usize,
}
