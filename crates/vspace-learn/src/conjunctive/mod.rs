//! Conjunctive hypotheses: one factor per attribute, every factor a concrete
//! value, the wildcard `?`, or the null seed `0`.

pub mod factor;
pub mod hypothesis;
pub mod schema;
pub mod space;

pub use factor::Factor;
pub use hypothesis::{Hypothesis, Instance};
pub use schema::{AttributeDomain, AttributeSchema};
pub use space::ConjunctiveSpace;
