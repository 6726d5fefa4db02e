//! Classifier: answers membership queries against a finished version space.
//!
//! An instance accepted by the specific hypothesis is certainly positive; one
//! rejected by every general hypothesis is certainly negative. Anything in
//! between is decided by a vote over the interpolated version space.

use std::fmt;

use tracing::debug;

use vspace_core::config::ClassifierConfig;
use vspace_core::errors::{ConceptError, ConceptResult};
use vspace_core::types::Label;

use crate::boundary::{Boundary, VersionSpace};
use crate::space::HypothesisSpace;

/// Vote tally behind an uncertain classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evidence {
    pub matched: usize,
    pub total: usize,
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.matched, self.total)
    }
}

/// A label, plus the vote tally when the version space was not unanimous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub label: Label,
    pub evidence: Option<Evidence>,
}

impl Classification {
    pub fn certain(label: Label) -> Self {
        Self {
            label,
            evidence: None,
        }
    }

    pub fn voted(label: Label, evidence: Evidence) -> Self {
        Self {
            label,
            evidence: Some(evidence),
        }
    }

    pub fn is_certain(&self) -> bool {
        self.evidence.is_none()
    }
}

/// Classifier over a version space whose S boundary holds exactly one
/// hypothesis.
pub struct Classifier<S: HypothesisSpace> {
    space: S,
    version_space: VersionSpace<S::Hypothesis>,
    specific: S::Hypothesis,
    enumerated: Boundary<S::Hypothesis>,
    vote_threshold: f64,
}

impl<S: HypothesisSpace> Classifier<S> {
    /// Freeze `version_space` for querying.
    ///
    /// Fails with [`ConceptError::NonSingletonSpecific`] unless S has exactly
    /// one member.
    pub fn new(
        space: S,
        version_space: VersionSpace<S::Hypothesis>,
        config: &ClassifierConfig,
    ) -> ConceptResult<Self> {
        let specific = version_space
            .specific
            .single()
            .cloned()
            .ok_or(ConceptError::NonSingletonSpecific {
                size: version_space.specific.len(),
            })?;
        let enumerated = enumerate(&space, &version_space, &specific);
        debug!(
            enumerated_size = enumerated.len(),
            general_size = version_space.general.len(),
            "classifier ready"
        );
        Ok(Self {
            space,
            version_space,
            specific,
            enumerated,
            vote_threshold: config.effective_vote_threshold(),
        })
    }

    pub fn classify(&self, instance: &S::Instance) -> ConceptResult<Classification> {
        self.space.validate(instance)?;

        if self.space.matches(&self.specific, instance) {
            return Ok(Classification::certain(Label::Positive));
        }
        if !self
            .version_space
            .general
            .iter()
            .any(|g| self.space.matches(g, instance))
        {
            return Ok(Classification::certain(Label::Negative));
        }
        Ok(self.vote(instance))
    }

    fn vote(&self, instance: &S::Instance) -> Classification {
        let total = self.enumerated.len();
        let matched = self
            .enumerated
            .iter()
            .filter(|h| self.space.matches(h, instance))
            .count();
        // Half-way cases round to even: 32.5 → 32.
        let required = (self.vote_threshold * total as f64).round_ties_even();
        let label = if matched as f64 >= required {
            Label::Positive
        } else {
            Label::Negative
        };
        Classification::voted(label, Evidence { matched, total })
    }

    /// S ∪ G ∪ every interpolated hypothesis between each g and S[0].
    pub fn enumerate_version_space(&self) -> &Boundary<S::Hypothesis> {
        &self.enumerated
    }

    pub fn version_space(&self) -> &VersionSpace<S::Hypothesis> {
        &self.version_space
    }

    /// The single member of S.
    pub fn specific(&self) -> &S::Hypothesis {
        &self.specific
    }

    pub fn space(&self) -> &S {
        &self.space
    }
}

fn enumerate<S: HypothesisSpace>(
    space: &S,
    version_space: &VersionSpace<S::Hypothesis>,
    specific: &S::Hypothesis,
) -> Boundary<S::Hypothesis> {
    let mut enumerated: Boundary<S::Hypothesis> = version_space.specific.iter().cloned().collect();
    enumerated.extend(version_space.general.iter().cloned());
    for g in version_space.general.iter() {
        enumerated.extend(space.interpolate(g, specific));
    }
    enumerated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjunctive::{ConjunctiveSpace, Hypothesis, Instance};

    fn h(tokens: &[&str]) -> Hypothesis {
        Hypothesis::parse(tokens)
    }

    fn i(values: &[&str]) -> Instance {
        Instance::parse(values)
    }

    fn classifier(specific: &[&str], general: &[&[&str]]) -> Classifier<ConjunctiveSpace> {
        let vs = VersionSpace::new(
            Boundary::singleton(h(specific)),
            general.iter().map(|g| h(g)).collect(),
        );
        Classifier::new(
            ConjunctiveSpace::binary(specific.len()),
            vs,
            &ClassifierConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn evidence_renders_as_fraction() {
        let evidence = Evidence {
            matched: 5,
            total: 65,
        };
        assert_eq!(evidence.to_string(), "5/65");
    }

    #[test]
    fn rejects_non_singleton_specific() {
        let vs = VersionSpace::new(Boundary::new(), Boundary::singleton(h(&["?", "?"])));
        let err = Classifier::new(ConjunctiveSpace::binary(2), vs, &ClassifierConfig::default())
            .err()
            .unwrap();
        assert_eq!(err, ConceptError::NonSingletonSpecific { size: 0 });
    }

    #[test]
    fn enumeration_is_deduplicated() {
        // S = (Y, N, Y), G = {(Y, ?, ?), (?, N, ?)}
        // Interpolations: (Y, N, ?), (Y, ?, Y) and (Y, N, ?), (?, N, Y).
        let c = classifier(&["Y", "N", "Y"], &[&["Y", "?", "?"], &["?", "N", "?"]]);
        let expected: Boundary<Hypothesis> = [
            h(&["Y", "N", "Y"]),
            h(&["Y", "?", "?"]),
            h(&["?", "N", "?"]),
            h(&["Y", "N", "?"]),
            h(&["Y", "?", "Y"]),
            h(&["?", "N", "Y"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(c.enumerate_version_space(), &expected);
    }

    #[test]
    fn vote_threshold_rounds_half_to_even() {
        // S = (Y, N, Y), G = {(?, ?, ?)}: five enumerated hypotheses, so half
        // is 2.5 and rounds down to 2.
        let c = classifier(&["Y", "N", "Y"], &[&["?", "?", "?"]]);
        assert_eq!(c.enumerate_version_space().len(), 5);
        // (Y, Y, N) matches (?, ?, ?) and (Y, ?, ?).
        let tie = c.classify(&i(&["Y", "Y", "N"])).unwrap();
        assert_eq!(tie.label, Label::Positive);
        assert_eq!(tie.evidence.unwrap().to_string(), "2/5");
        // (N, Y, N) matches only (?, ?, ?).
        let below = c.classify(&i(&["N", "Y", "N"])).unwrap();
        assert_eq!(below.label, Label::Negative);
        assert_eq!(below.evidence.unwrap().to_string(), "1/5");
    }

    #[test]
    fn vote_at_exact_half_is_positive() {
        // Six enumerated hypotheses; half is exactly 3.
        let c = classifier(&["Y", "N", "Y"], &[&["Y", "?", "?"], &["?", "N", "?"]]);
        // (Y, Y, N) matches only (Y, ?, ?): 1/6 < 3.
        let negative = c.classify(&i(&["Y", "Y", "N"])).unwrap();
        assert_eq!(negative.label, Label::Negative);
        assert_eq!(negative.evidence.unwrap().to_string(), "1/6");
        // (Y, N, N) matches (Y, ?, ?), (?, N, ?), (Y, N, ?): 3/6 >= 3.
        let positive = c.classify(&i(&["Y", "N", "N"])).unwrap();
        assert_eq!(positive.label, Label::Positive);
        assert_eq!(positive.evidence.unwrap().to_string(), "3/6");
    }
}
