//! HypothesisSpace: the capability interface the elimination engine and the
//! classifier are written against.
//!
//! A representation supplies matching, the generality order, minimal
//! generalization/specialization, and the boundary seeds. Pruning and the
//! remove-(non-)matching filters have pairwise defaults that any
//! representation may override.

use std::fmt::Debug;
use std::hash::Hash;

use vspace_core::errors::ConceptResult;

use crate::boundary::Boundary;

pub trait HypothesisSpace {
    type Hypothesis: Clone + Eq + Hash + Debug;
    type Instance: Debug;

    /// Number of attributes every hypothesis and instance carries.
    fn arity(&self) -> usize;

    /// The hypothesis accepting nothing.
    fn most_specific(&self) -> Self::Hypothesis;

    /// The hypothesis accepting everything.
    fn most_general(&self) -> Self::Hypothesis;

    /// Seed for the S boundary.
    fn initialize_s(&self) -> Boundary<Self::Hypothesis> {
        Boundary::singleton(self.most_specific())
    }

    /// Seed for the G boundary.
    fn initialize_g(&self) -> Boundary<Self::Hypothesis> {
        Boundary::singleton(self.most_general())
    }

    /// Reject instances that do not fit the space (wrong arity, unknown values).
    fn validate(&self, instance: &Self::Instance) -> ConceptResult<()>;

    /// Whether `hypothesis` accepts `instance`.
    fn matches(&self, hypothesis: &Self::Hypothesis, instance: &Self::Instance) -> bool;

    /// Reflexive generality order: `h1` accepts everything `h2` accepts.
    fn more_general(&self, h1: &Self::Hypothesis, h2: &Self::Hypothesis) -> bool;

    fn more_specific(&self, h1: &Self::Hypothesis, h2: &Self::Hypothesis) -> bool {
        self.more_general(h2, h1)
    }

    /// Minimal generalization of `specific` that accepts `instance`.
    fn min_generalization(
        &self,
        specific: &Self::Hypothesis,
        instance: &Self::Instance,
    ) -> Self::Hypothesis;

    /// Minimal specializations of `general` that reject `instance`.
    fn min_specializations(
        &self,
        general: &Self::Hypothesis,
        instance: &Self::Instance,
    ) -> Vec<Self::Hypothesis>;

    /// Hypotheses lying between `general` and `specific` that the compact
    /// boundary representation leaves implicit.
    fn interpolate(
        &self,
        general: &Self::Hypothesis,
        specific: &Self::Hypothesis,
    ) -> Vec<Self::Hypothesis>;

    fn remove_non_matching(
        &self,
        boundary: &mut Boundary<Self::Hypothesis>,
        instance: &Self::Instance,
    ) {
        boundary.retain(|h| self.matches(h, instance));
    }

    fn remove_matching(&self, boundary: &mut Boundary<Self::Hypothesis>, instance: &Self::Instance) {
        boundary.retain(|h| !self.matches(h, instance));
    }

    /// Drop every member of S that is more general than another member.
    fn prune_more_general(&self, boundary: Boundary<Self::Hypothesis>) -> Boundary<Self::Hypothesis> {
        prune_dominated(boundary, |h, other| self.more_general(h, other))
    }

    /// Drop every member of G that is more specific than another member.
    fn prune_more_specific(
        &self,
        boundary: Boundary<Self::Hypothesis>,
    ) -> Boundary<Self::Hypothesis> {
        prune_dominated(boundary, |h, other| self.more_specific(h, other))
    }
}

/// Keep the members `h` for which no distinct member `other` satisfies
/// `relation(h, other)`. Decisions are taken against the unpruned set.
pub fn prune_dominated<H, F>(boundary: Boundary<H>, relation: F) -> Boundary<H>
where
    H: Eq + Hash,
    F: Fn(&H, &H) -> bool,
{
    let members: Vec<H> = boundary.into_iter().collect();
    let doomed: Vec<bool> = members
        .iter()
        .map(|h| members.iter().any(|other| other != h && relation(h, other)))
        .collect();

    members
        .into_iter()
        .zip(doomed)
        .filter_map(|(h, drop)| (!drop).then_some(h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_keeps_maximal_elements_of_a_chain() {
        // Divisibility as a stand-in order: a "is more specific" than b when b divides a.
        let boundary: Boundary<u32> = [2, 4, 8, 3].into_iter().collect();
        let pruned = prune_dominated(boundary, |h, other| h % other == 0);
        let expected: Boundary<u32> = [2, 3].into_iter().collect();
        assert_eq!(pruned, expected);
    }

    #[test]
    fn prune_of_empty_boundary_is_empty() {
        let pruned = prune_dominated(Boundary::<u32>::new(), |_, _| true);
        assert!(pruned.is_empty());
    }
}
