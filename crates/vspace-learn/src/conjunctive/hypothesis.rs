//! Conjunctive hypotheses and the instances they classify.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::factor::Factor;

/// An ordered, fixed-length tuple of factors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hypothesis(Vec<Factor>);

impl Hypothesis {
    pub fn new(factors: Vec<Factor>) -> Self {
        Self(factors)
    }

    /// Build from tokens (`?`, `0`, or values), e.g. `["?", "N", "Y"]`.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Self {
        Self(tokens.iter().map(|t| Factor::parse(t.as_ref())).collect())
    }

    /// A hypothesis repeating `factor` at every position.
    pub fn filled(arity: usize, factor: Factor) -> Self {
        Self(vec![factor; arity])
    }

    pub fn factors(&self) -> &[Factor] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this hypothesis with position `index` replaced.
    pub fn with_factor(&self, index: usize, factor: Factor) -> Self {
        let mut factors = self.0.clone();
        factors[index] = factor;
        Self(factors)
    }

    /// Whether every factor accepts the instance's value at its position.
    pub fn matches(&self, instance: &Instance) -> bool {
        self.len() == instance.len()
            && self
                .0
                .iter()
                .zip(instance.values())
                .all(|(factor, value)| factor.accepts(value))
    }

    /// Factor-wise match between two hypotheses.
    pub fn matches_hypothesis(&self, other: &Hypothesis) -> bool {
        self.len() == other.len() && self.0.iter().zip(&other.0).all(|(a, b)| a.matches(b))
    }

    /// Positions whose factor rejects the instance's value.
    pub fn contradictions(&self, instance: &Instance) -> Vec<usize> {
        self.0
            .iter()
            .zip(instance.values())
            .enumerate()
            .filter(|(_, (factor, value))| !factor.accepts(value))
            .map(|(i, _)| i)
            .collect()
    }

    /// `self` accepts every instance `other` accepts: the two match factor-wise
    /// and `self` is a wildcard wherever `other` is. Reflexive.
    pub fn is_more_general_than(&self, other: &Hypothesis) -> bool {
        self.matches_hypothesis(other)
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(mine, theirs)| !theirs.is_wildcard() || mine.is_wildcard())
    }
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, factor) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{factor}")?;
        }
        f.write_str(")")
    }
}

impl From<&Instance> for Hypothesis {
    fn from(instance: &Instance) -> Self {
        Self(instance.values().iter().map(|v| Factor::value(v.as_str())).collect())
    }
}

/// An ordered tuple of concrete attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instance(Vec<String>);

impl Instance {
    pub fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    pub fn parse<S: AsRef<str>>(values: &[S]) -> Self {
        Self(values.iter().map(|v| v.as_ref().to_string()).collect())
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Instance {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(tokens: &[&str]) -> Hypothesis {
        Hypothesis::parse(tokens)
    }

    fn i(values: &[&str]) -> Instance {
        Instance::parse(values)
    }

    #[test]
    fn match_examples() {
        let shape = i(&["small", "red", "circle"]);
        assert!(!h(&["big", "?", "?"]).matches(&shape));
        assert!(h(&["?", "?", "circle"]).matches(&shape));
        assert!(h(&["?", "?", "?"]).matches(&shape));
        assert!(h(&["small", "red", "?"]).matches_hypothesis(&h(&["?", "red", "circle"])));
    }

    #[test]
    fn length_mismatch_never_matches() {
        assert!(!h(&["?", "?"]).matches(&i(&["a", "b", "c"])));
    }

    #[test]
    fn contradiction_positions() {
        let s = h(&["N", "N", "N", "Y", "N", "N", "N", "Y", "N", "Y"]);
        let x = i(&["N", "Y", "N", "N", "N", "N", "Y", "N", "N", "Y"]);
        assert_eq!(s.contradictions(&x), vec![1, 3, 6, 7]);
    }

    #[test]
    fn generality_examples() {
        assert!(h(&["?", "?", "?"]).is_more_general_than(&h(&["Y", "N", "?"])));
        assert!(!h(&["Y", "N", "?"]).is_more_general_than(&h(&["Y", "?", "?"])));
        assert!(!h(&["Y", "?", "?"]).is_more_general_than(&h(&["?", "N", "?"])));
        assert!(h(&["Y", "?", "N"]).is_more_general_than(&h(&["Y", "?", "N"])));
    }

    #[test]
    fn display_forms() {
        assert_eq!(h(&["?", "0", "Y"]).to_string(), "(?, 0, Y)");
        assert_eq!(i(&["a", "b"]).to_string(), "(a, b)");
    }
}
