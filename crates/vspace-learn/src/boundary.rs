//! Boundary sets and the version space they delimit.

use std::hash::Hash;

use vspace_core::types::FxHashSet;

/// A set of hypotheses forming one edge of a version space.
///
/// Membership is keyed by hypothesis value, so duplicates collapse and two
/// boundaries compare equal exactly when they hold the same hypotheses.
#[derive(Debug, Clone)]
pub struct Boundary<H> {
    members: FxHashSet<H>,
}

impl<H: Eq + Hash> Boundary<H> {
    pub fn new() -> Self {
        Self {
            members: FxHashSet::default(),
        }
    }

    pub fn singleton(hypothesis: H) -> Self {
        let mut boundary = Self::new();
        boundary.insert(hypothesis);
        boundary
    }

    /// Insert a hypothesis. Returns `false` if it was already present.
    pub fn insert(&mut self, hypothesis: H) -> bool {
        self.members.insert(hypothesis)
    }

    pub fn contains(&self, hypothesis: &H) -> bool {
        self.members.contains(hypothesis)
    }

    pub fn retain<F: FnMut(&H) -> bool>(&mut self, f: F) {
        self.members.retain(f);
    }

    pub fn iter(&self) -> impl Iterator<Item = &H> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The sole member, if the boundary holds exactly one hypothesis.
    pub fn single(&self) -> Option<&H> {
        if self.members.len() == 1 {
            self.members.iter().next()
        } else {
            None
        }
    }
}

impl<H: Eq + Hash> Default for Boundary<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Eq + Hash> PartialEq for Boundary<H> {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<H: Eq + Hash> Eq for Boundary<H> {}

impl<H: Eq + Hash> FromIterator<H> for Boundary<H> {
    fn from_iter<T: IntoIterator<Item = H>>(iter: T) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<H: Eq + Hash> Extend<H> for Boundary<H> {
    fn extend<T: IntoIterator<Item = H>>(&mut self, iter: T) {
        self.members.extend(iter);
    }
}

impl<H> IntoIterator for Boundary<H> {
    type Item = H;
    type IntoIter = std::collections::hash_set::IntoIter<H>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a Boundary<H> {
    type Item = &'a H;
    type IntoIter = std::collections::hash_set::Iter<'a, H>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// The most-specific (S) and most-general (G) boundaries of the hypotheses
/// consistent with the examples seen so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSpace<H: Eq + Hash> {
    pub specific: Boundary<H>,
    pub general: Boundary<H>,
}

impl<H: Eq + Hash> VersionSpace<H> {
    pub fn new(specific: Boundary<H>, general: Boundary<H>) -> Self {
        Self { specific, general }
    }

    /// True once S and G hold the same hypotheses.
    pub fn is_converged(&self) -> bool {
        self.specific == self.general
    }

    /// Split into the `(G, S)` pair.
    pub fn into_boundaries(self) -> (Boundary<H>, Boundary<H>) {
        (self.general, self.specific)
    }
}
