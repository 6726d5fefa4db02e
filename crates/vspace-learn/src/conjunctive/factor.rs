//! Per-attribute factors.

use std::fmt;

use vspace_core::constants::{NULL_TOKEN, WILDCARD_TOKEN};

/// One attribute's constraint inside a conjunctive hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Factor {
    /// Unset placeholder of the most-specific seed. Accepts no value.
    Null,
    /// Wildcard. Accepts every value.
    Any,
    /// Accepts exactly this value.
    Value(String),
}

impl Factor {
    /// Parse a factor from its token: `0`, `?`, or a concrete value.
    pub fn parse(token: &str) -> Self {
        match token {
            NULL_TOKEN => Self::Null,
            WILDCARD_TOKEN => Self::Any,
            value => Self::Value(value.to_string()),
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Factor-level match: equal factors, or either side a wildcard.
    /// Null is an ordinary token here, so it only matches itself or `?`.
    pub fn matches(&self, other: &Factor) -> bool {
        self == other || self.is_wildcard() || other.is_wildcard()
    }

    /// Whether this factor accepts a concrete attribute value.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Value(v) => v == value,
            Self::Null => false,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(NULL_TOKEN),
            Self::Any => f.write_str(WILDCARD_TOKEN),
            Self::Value(v) => f.write_str(v),
        }
    }
}

impl From<&str> for Factor {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_render_tokens() {
        assert_eq!(Factor::parse("?"), Factor::Any);
        assert_eq!(Factor::parse("0"), Factor::Null);
        assert_eq!(Factor::parse("Y"), Factor::value("Y"));
        for token in ["?", "0", "circle"] {
            assert_eq!(Factor::parse(token).to_string(), token);
        }
    }

    #[test]
    fn factor_match_table() {
        let y = Factor::value("Y");
        let n = Factor::value("N");
        assert!(!y.matches(&n));
        assert!(!n.matches(&y));
        assert!(y.matches(&Factor::Any));
        assert!(Factor::Any.matches(&n));
        assert!(y.matches(&y));
        assert!(Factor::Null.matches(&Factor::Null));
        assert!(!Factor::Null.matches(&y));
    }

    #[test]
    fn null_accepts_nothing() {
        assert!(!Factor::Null.accepts("Y"));
        assert!(Factor::Any.accepts("anything"));
        assert!(Factor::value("red").accepts("red"));
        assert!(!Factor::value("red").accepts("blue"));
    }
}
