//! ConjunctiveSpace: the conjunctive-tuple implementation of
//! [`HypothesisSpace`].

use vspace_core::errors::ConceptResult;

use super::factor::Factor;
use super::hypothesis::{Hypothesis, Instance};
use super::schema::AttributeSchema;
use crate::space::HypothesisSpace;

/// Conjunctive hypotheses over a fixed attribute schema.
#[derive(Debug, Clone)]
pub struct ConjunctiveSpace {
    schema: AttributeSchema,
}

impl ConjunctiveSpace {
    pub fn new(schema: AttributeSchema) -> Self {
        Self { schema }
    }

    /// Space over `arity` Y/N attributes.
    pub fn binary(arity: usize) -> Self {
        Self::new(AttributeSchema::binary(arity))
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }
}

impl HypothesisSpace for ConjunctiveSpace {
    type Hypothesis = Hypothesis;
    type Instance = Instance;

    fn arity(&self) -> usize {
        self.schema.arity()
    }

    fn most_specific(&self) -> Hypothesis {
        Hypothesis::filled(self.arity(), Factor::Null)
    }

    fn most_general(&self) -> Hypothesis {
        Hypothesis::filled(self.arity(), Factor::Any)
    }

    fn validate(&self, instance: &Instance) -> ConceptResult<()> {
        self.schema.validate(instance)
    }

    fn matches(&self, hypothesis: &Hypothesis, instance: &Instance) -> bool {
        hypothesis.matches(instance)
    }

    fn more_general(&self, h1: &Hypothesis, h2: &Hypothesis) -> bool {
        h1.is_more_general_than(h2)
    }

    /// Null factors take the instance's value; any other contradicting factor
    /// widens to the wildcard. The result is unique.
    fn min_generalization(&self, specific: &Hypothesis, instance: &Instance) -> Hypothesis {
        let mut factors = specific.factors().to_vec();
        for i in specific.contradictions(instance) {
            factors[i] = if factors[i].is_null() {
                Factor::value(instance.values()[i].as_str())
            } else {
                Factor::Any
            };
        }
        Hypothesis::new(factors)
    }

    /// One specialization per wildcard position and per domain value other
    /// than the instance's. For two-valued domains that is the single "other"
    /// value.
    fn min_specializations(&self, general: &Hypothesis, instance: &Instance) -> Vec<Hypothesis> {
        let mut specializations = Vec::new();
        for (i, factor) in general.factors().iter().enumerate() {
            if !factor.is_wildcard() {
                continue;
            }
            let (Some(domain), Some(value)) = (self.schema.domain(i), instance.get(i)) else {
                continue;
            };
            for other in domain.others(value) {
                specializations.push(general.with_factor(i, Factor::value(other)));
            }
        }
        specializations
    }

    /// For each position where `general` differs from `specific`, the copy of
    /// `general` taking `specific`'s factor there.
    fn interpolate(&self, general: &Hypothesis, specific: &Hypothesis) -> Vec<Hypothesis> {
        general
            .factors()
            .iter()
            .zip(specific.factors())
            .enumerate()
            .filter(|(_, (g, s))| g != s)
            .map(|(i, (_, s))| general.with_factor(i, s.clone()))
            .collect()
    }
}
