//! Constants shared across the learner.

/// Token rendering the wildcard factor, which matches every value.
pub const WILDCARD_TOKEN: &str = "?";

/// Token rendering the null factor seeded into the specific boundary.
pub const NULL_TOKEN: &str = "0";

/// Default marker for positive examples.
pub const DEFAULT_POSITIVE_LABEL: &str = "+";

/// Default marker for negative examples.
pub const DEFAULT_NEGATIVE_LABEL: &str = "-";

/// Default two-valued attribute domain.
pub const DEFAULT_ATTRIBUTE_VALUES: [&str; 2] = ["Y", "N"];

/// Default fraction of the enumerated version space that must match for a
/// positive vote.
pub const DEFAULT_VOTE_THRESHOLD: f64 = 0.5;
