//! Attribute domains: the concrete values each attribute may take.

use serde::{Deserialize, Serialize};

use vspace_core::constants::DEFAULT_ATTRIBUTE_VALUES;
use vspace_core::errors::{ConceptError, ConceptResult};

use super::hypothesis::Instance;
use crate::dataset::TrainingSet;

/// The ordered, distinct values of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeDomain {
    values: Vec<String>,
}

impl AttributeDomain {
    /// Build a domain; repeated values keep their first position.
    pub fn new<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        let mut domain = Self { values: Vec::new() };
        for value in values {
            domain.push(value.into());
        }
        domain
    }

    fn push(&mut self, value: String) {
        if !self.values.contains(&value) {
            self.values.push(value);
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Every value of the domain except `value`, in domain order.
    pub fn others<'a>(&'a self, value: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.values
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != value)
    }
}

/// One domain per attribute position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    domains: Vec<AttributeDomain>,
}

impl AttributeSchema {
    pub fn from_domains(domains: Vec<AttributeDomain>) -> Self {
        Self { domains }
    }

    /// `arity` attributes sharing the same domain.
    pub fn uniform<S: Into<String> + Clone>(arity: usize, values: &[S]) -> Self {
        let domain = AttributeDomain::new(values.iter().cloned());
        Self {
            domains: vec![domain; arity],
        }
    }

    /// `arity` two-valued Y/N attributes.
    pub fn binary(arity: usize) -> Self {
        Self::uniform(arity, &DEFAULT_ATTRIBUTE_VALUES)
    }

    /// Collect the values observed at each position, in first-seen order.
    pub fn infer(training_set: &TrainingSet) -> ConceptResult<Self> {
        let arity = training_set.arity().ok_or(ConceptError::EmptyTrainingSet)?;
        let mut domains = vec![AttributeDomain::new(Vec::<String>::new()); arity];
        for example in training_set.examples() {
            for (domain, value) in domains.iter_mut().zip(example.instance.values()) {
                domain.push(value.clone());
            }
        }
        Ok(Self { domains })
    }

    pub fn arity(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, position: usize) -> Option<&AttributeDomain> {
        self.domains.get(position)
    }

    pub fn domains(&self) -> &[AttributeDomain] {
        &self.domains
    }

    /// Check arity and that every value belongs to its attribute's domain.
    pub fn validate(&self, instance: &Instance) -> ConceptResult<()> {
        if instance.len() != self.arity() {
            return Err(ConceptError::MalformedInstance {
                expected: self.arity(),
                found: instance.len(),
            });
        }
        for (position, (domain, value)) in self.domains.iter().zip(instance.values()).enumerate() {
            if !domain.contains(value) {
                return Err(ConceptError::UnknownValue {
                    position,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
