//! EliminationEngine: the candidate-elimination S/G update loop.
//!
//! The engine is written against [`HypothesisSpace`] only; it never looks
//! inside a hypothesis. Each example either narrows G and widens S
//! (positive) or narrows S and specializes G (negative). The loop stops
//! early once S and G hold the same hypotheses.

use std::sync::Arc;

use tracing::{debug, info, trace};

use vspace_core::config::LearningConfig;
use vspace_core::errors::{ConceptError, ConceptResult};
use vspace_core::types::Label;

use crate::boundary::{Boundary, VersionSpace};
use crate::dataset::Example;
use crate::events::{
    ConvergedEvent, EventDispatcher, ExampleProcessedEvent, LearningEventHandler,
    TrainingCompleteEvent, TrainingStartedEvent,
};
use crate::space::HypothesisSpace;

/// Result of a full pass of the elimination loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingOutcome<H: Eq + std::hash::Hash> {
    pub version_space: VersionSpace<H>,
    /// Number of examples fed through `update`.
    pub examples_processed: usize,
    /// Index of the example after which S and G first coincided.
    pub converged_at: Option<usize>,
}

impl<H: Eq + std::hash::Hash> TrainingOutcome<H> {
    /// The `(G, S)` pair.
    pub fn into_boundaries(self) -> (Boundary<H>, Boundary<H>) {
        self.version_space.into_boundaries()
    }
}

/// Candidate-elimination driver over any hypothesis space.
pub struct EliminationEngine<S: HypothesisSpace> {
    space: S,
    stop_on_convergence: bool,
    dispatcher: EventDispatcher<S::Hypothesis, S::Instance>,
}

impl<S: HypothesisSpace> EliminationEngine<S> {
    pub fn new(space: S) -> Self {
        Self::with_config(space, &LearningConfig::default())
    }

    pub fn with_config(space: S, config: &LearningConfig) -> Self {
        Self {
            space,
            stop_on_convergence: config.effective_stop_on_convergence(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Attach an observer of the update loop.
    pub fn register_handler(
        &mut self,
        handler: Arc<dyn LearningEventHandler<S::Hypothesis, S::Instance>>,
    ) {
        self.dispatcher.register(handler);
    }

    pub fn space(&self) -> &S {
        &self.space
    }

    /// Give up the hypothesis space, e.g. to hand it to a classifier.
    pub fn into_space(self) -> S {
        self.space
    }

    /// The seeded version space: S = {most specific}, G = {most general}.
    pub fn initial_version_space(&self) -> VersionSpace<S::Hypothesis> {
        VersionSpace::new(self.space.initialize_s(), self.space.initialize_g())
    }

    /// Run the loop over `examples` in order.
    pub fn run(
        &self,
        examples: &[Example<S::Instance>],
    ) -> ConceptResult<TrainingOutcome<S::Hypothesis>> {
        if examples.is_empty() {
            return Err(ConceptError::EmptyTrainingSet);
        }

        info!(
            example_count = examples.len(),
            arity = self.space.arity(),
            handlers = self.dispatcher.handler_count(),
            "running candidate elimination"
        );
        self.dispatcher.emit_training_started(&TrainingStartedEvent {
            example_count: examples.len(),
            arity: self.space.arity(),
        });

        let mut version_space = self.initial_version_space();
        let mut examples_processed = 0;
        let mut converged_at = None;

        for (index, example) in examples.iter().enumerate() {
            self.update(&mut version_space, example)?;
            examples_processed += 1;

            self.dispatcher.emit_example_processed(&ExampleProcessedEvent {
                index,
                instance: &example.instance,
                label: example.label,
                specific: &version_space.specific,
                general: &version_space.general,
            });

            if version_space.is_converged() {
                if converged_at.is_none() {
                    converged_at = Some(index);
                    self.dispatcher.emit_converged(&ConvergedEvent {
                        index,
                        concept: &version_space.specific,
                    });
                }
                if self.stop_on_convergence {
                    info!(example_index = index, "version space converged, stopping early");
                    break;
                }
            }
        }

        let complete = TrainingCompleteEvent {
            examples_processed,
            converged: version_space.is_converged(),
            specific_size: version_space.specific.len(),
            general_size: version_space.general.len(),
        };
        info!(
            examples_processed = complete.examples_processed,
            converged = complete.converged,
            specific_size = complete.specific_size,
            general_size = complete.general_size,
            "candidate elimination complete"
        );
        self.dispatcher.emit_training_complete(&complete);

        Ok(TrainingOutcome {
            version_space,
            examples_processed,
            converged_at,
        })
    }

    /// Apply one example to the version space.
    ///
    /// The instance is validated first, so a malformed example leaves the
    /// boundaries untouched.
    pub fn update(
        &self,
        version_space: &mut VersionSpace<S::Hypothesis>,
        example: &Example<S::Instance>,
    ) -> ConceptResult<()> {
        self.space.validate(&example.instance)?;
        match example.label {
            Label::Positive => self.admit_positive(version_space, &example.instance),
            Label::Negative => self.admit_negative(version_space, &example.instance),
        }
        debug!(
            label = %example.label,
            specific_size = version_space.specific.len(),
            general_size = version_space.general.len(),
            "boundaries updated"
        );
        Ok(())
    }

    fn admit_positive(&self, vs: &mut VersionSpace<S::Hypothesis>, instance: &S::Instance) {
        self.space.remove_non_matching(&mut vs.general, instance);

        let mut specific = Boundary::new();
        for s in vs.specific.iter() {
            if self.space.matches(s, instance) {
                specific.insert(s.clone());
                continue;
            }
            let generalization = self.space.min_generalization(s, instance);
            if self.bounded_by_general(&generalization, &vs.general) {
                specific.insert(generalization);
            } else {
                trace!(?generalization, "generalization escapes G, discarded");
            }
        }
        vs.specific = self.space.prune_more_general(specific);
    }

    fn admit_negative(&self, vs: &mut VersionSpace<S::Hypothesis>, instance: &S::Instance) {
        self.space.remove_matching(&mut vs.specific, instance);

        let seed = self.space.most_specific();
        let mut general = Boundary::new();
        for g in vs.general.iter() {
            if !self.space.matches(g, instance) {
                general.insert(g.clone());
                continue;
            }
            for specialization in self.space.min_specializations(g, instance) {
                if self.grounded_in_specific(&specialization, &vs.specific, &seed) {
                    general.insert(specialization);
                } else {
                    trace!(?specialization, "specialization not above any member of S, discarded");
                }
            }
        }
        vs.general = self.space.prune_more_specific(general);
    }

    /// Some member of G is at least as general as `hypothesis`; an empty G
    /// accepts anything.
    fn bounded_by_general(
        &self,
        hypothesis: &S::Hypothesis,
        general: &Boundary<S::Hypothesis>,
    ) -> bool {
        general.is_empty() || general.iter().any(|g| self.space.more_general(g, hypothesis))
    }

    /// `hypothesis` sits above some member of S, or that member is still the
    /// untouched seed.
    fn grounded_in_specific(
        &self,
        hypothesis: &S::Hypothesis,
        specific: &Boundary<S::Hypothesis>,
        seed: &S::Hypothesis,
    ) -> bool {
        specific
            .iter()
            .any(|s| s == seed || self.space.more_general(hypothesis, s))
    }
}
