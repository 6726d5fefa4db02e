//! Property tests for the generality order, the boundary operators, and the
//! elimination loop.

use proptest::prelude::*;

use vspace_core::config::LearningConfig;
use vspace_learn::{
    ConjunctiveSpace, EliminationEngine, Example, Hypothesis, HypothesisSpace, Instance,
};

const ARITY: usize = 4;

fn hypothesis_strategy() -> impl Strategy<Value = Hypothesis> {
    prop::collection::vec(prop_oneof![Just("Y"), Just("N"), Just("?")], ARITY)
        .prop_map(|tokens| Hypothesis::parse(&tokens))
}

fn instance_strategy() -> impl Strategy<Value = Instance> {
    prop::collection::vec(prop_oneof![Just("Y"), Just("N")], ARITY)
        .prop_map(|values| Instance::parse(&values))
}

/// Examples labelled by a hidden target concept, so the data is always
/// consistent with some hypothesis.
fn consistent_examples() -> impl Strategy<Value = Vec<Example<Instance>>> {
    (
        hypothesis_strategy(),
        prop::collection::vec(instance_strategy(), 1..16),
    )
        .prop_map(|(target, instances)| {
            instances
                .into_iter()
                .map(|instance| {
                    if target.matches(&instance) {
                        Example::positive(instance)
                    } else {
                        Example::negative(instance)
                    }
                })
                .collect()
        })
}

// =============================================================================
// Generality order
// =============================================================================
proptest! {
    #[test]
    fn more_general_is_reflexive(h in hypothesis_strategy()) {
        let space = ConjunctiveSpace::binary(ARITY);
        prop_assert!(space.more_general(&h, &h));
    }

    #[test]
    fn more_general_is_antisymmetric(a in hypothesis_strategy(), b in hypothesis_strategy()) {
        let space = ConjunctiveSpace::binary(ARITY);
        if space.more_general(&a, &b) && space.more_general(&b, &a) {
            prop_assert_eq!(a, b);
        }
    }
}

// =============================================================================
// Boundary operators
// =============================================================================
proptest! {
    #[test]
    fn generalization_covers_instance_and_source(
        s in hypothesis_strategy(),
        x in instance_strategy()
    ) {
        let space = ConjunctiveSpace::binary(ARITY);
        let generalized = space.min_generalization(&s, &x);
        prop_assert!(space.matches(&generalized, &x));
        prop_assert!(space.more_general(&generalized, &s));
    }

    #[test]
    fn specializations_reject_instance(
        g in hypothesis_strategy(),
        x in instance_strategy()
    ) {
        let space = ConjunctiveSpace::binary(ARITY);
        let wildcards = g.factors().iter().filter(|f| f.is_wildcard()).count();
        let narrowed = space.min_specializations(&g, &x);
        prop_assert_eq!(narrowed.len(), wildcards);
        for h in &narrowed {
            prop_assert!(!space.matches(h, &x), "{} still matches {}", h, x);
            prop_assert!(space.more_general(&g, h));
        }
    }
}

// =============================================================================
// Elimination loop
// =============================================================================
proptest! {
    #[test]
    fn boundaries_stay_ordered_after_each_update(examples in consistent_examples()) {
        let engine = EliminationEngine::new(ConjunctiveSpace::binary(ARITY));
        let space = engine.space();
        let seed = space.most_specific();
        let mut vs = engine.initial_version_space();

        for example in &examples {
            engine.update(&mut vs, example).unwrap();
            for s in vs.specific.iter() {
                prop_assert!(
                    *s == seed || vs.general.iter().any(|g| space.more_general(g, s)),
                    "{} escapes G", s
                );
            }
            for a in vs.general.iter() {
                for b in vs.general.iter() {
                    prop_assert!(
                        a == b || !space.more_specific(a, b),
                        "G holds {} below {}", a, b
                    );
                }
            }
            for a in vs.specific.iter() {
                for b in vs.specific.iter() {
                    prop_assert!(
                        a == b || !space.more_general(a, b),
                        "S holds {} above {}", a, b
                    );
                }
            }
        }
    }

    #[test]
    fn consistent_data_never_empties_the_version_space(examples in consistent_examples()) {
        let engine = EliminationEngine::new(ConjunctiveSpace::binary(ARITY));
        let outcome = engine.run(&examples).unwrap();
        prop_assert!(!outcome.version_space.general.is_empty());
        prop_assert!(!outcome.version_space.specific.is_empty());
    }

    #[test]
    fn stopping_at_convergence_matches_full_run(examples in consistent_examples()) {
        let stopping = EliminationEngine::new(ConjunctiveSpace::binary(ARITY));
        let exhaustive = EliminationEngine::with_config(
            ConjunctiveSpace::binary(ARITY),
            &LearningConfig {
                stop_on_convergence: Some(false),
                ..Default::default()
            },
        );

        let early = stopping.run(&examples).unwrap();
        let full = exhaustive.run(&examples).unwrap();

        prop_assert_eq!(full.examples_processed, examples.len());
        prop_assert_eq!(early.converged_at, full.converged_at);
        prop_assert_eq!(early.version_space, full.version_space);
    }
}
