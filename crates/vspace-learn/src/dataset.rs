//! Labeled examples and training-set decoding.

use serde::{Deserialize, Serialize};

use vspace_core::errors::{ConceptError, ConceptResult};
use vspace_core::types::{Label, LabelMarkers};

use crate::conjunctive::Instance;

/// An instance paired with its concept label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example<I> {
    pub instance: I,
    pub label: Label,
}

impl<I> Example<I> {
    pub fn new(instance: I, label: Label) -> Self {
        Self { instance, label }
    }

    pub fn positive(instance: I) -> Self {
        Self::new(instance, Label::Positive)
    }

    pub fn negative(instance: I) -> Self {
        Self::new(instance, Label::Negative)
    }
}

/// Wire shape of one example: attribute values plus a raw label marker.
///
/// Deserializes from `{"attributes": [...], "label": "+"}` or from the pair
/// form `[[...], "+"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRow")]
pub struct RawExample {
    pub attributes: Vec<String>,
    pub label: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Object { attributes: Vec<String>, label: String },
    Pair(Vec<String>, String),
}

impl From<RawRow> for RawExample {
    fn from(row: RawRow) -> Self {
        match row {
            RawRow::Object { attributes, label } | RawRow::Pair(attributes, label) => {
                Self { attributes, label }
            }
        }
    }
}

/// An ordered sequence of decoded examples sharing one arity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainingSet {
    examples: Vec<Example<Instance>>,
}

impl TrainingSet {
    /// Build from decoded examples. Every instance must have the arity of the
    /// first one.
    pub fn new(examples: Vec<Example<Instance>>) -> ConceptResult<Self> {
        if let Some(first) = examples.first() {
            let expected = first.instance.len();
            if let Some(ragged) = examples.iter().find(|e| e.instance.len() != expected) {
                return Err(ConceptError::MalformedInstance {
                    expected,
                    found: ragged.instance.len(),
                });
            }
        }
        Ok(Self { examples })
    }

    /// Decode raw label markers, failing on the first unknown marker.
    pub fn decode(raw: Vec<RawExample>, markers: &LabelMarkers) -> ConceptResult<Self> {
        let examples = raw
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let label = markers.decode(index, &row.label)?;
                Ok(Example::new(Instance::new(row.attributes), label))
            })
            .collect::<ConceptResult<Vec<_>>>()?;
        Self::new(examples)
    }

    /// Parse a JSON array of raw examples and decode it.
    pub fn from_json(json: &str, markers: &LabelMarkers) -> ConceptResult<Self> {
        let raw: Vec<RawExample> =
            serde_json::from_str(json).map_err(|e| ConceptError::DatasetParse {
                message: e.to_string(),
            })?;
        Self::decode(raw, markers)
    }

    pub fn examples(&self) -> &[Example<Instance>] {
        &self.examples
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Attribute count of the first example, if any.
    pub fn arity(&self) -> Option<usize> {
        self.examples.first().map(|e| e.instance.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_row_shapes() {
        let json = r#"[
            {"attributes": ["Y", "N"], "label": "+"},
            [["N", "N"], "-"]
        ]"#;
        let set = TrainingSet::from_json(json, &LabelMarkers::default()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.arity(), Some(2));
        assert_eq!(set.examples()[0].label, Label::Positive);
        assert_eq!(set.examples()[1].label, Label::Negative);
        assert_eq!(set.examples()[1].instance, Instance::parse(&["N", "N"]));
    }

    #[test]
    fn unknown_marker_reports_index() {
        let json = r#"[[["Y"], "+"], [["N"], "-"], [["N"], "?"]]"#;
        let err = TrainingSet::from_json(json, &LabelMarkers::default()).unwrap_err();
        assert_eq!(
            err,
            ConceptError::InvalidLabel {
                index: 2,
                label: "?".into()
            }
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let json = r#"[[["Y", "N"], "+"], [["N"], "-"]]"#;
        let err = TrainingSet::from_json(json, &LabelMarkers::default()).unwrap_err();
        assert_eq!(
            err,
            ConceptError::MalformedInstance {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = TrainingSet::from_json("{not json", &LabelMarkers::default()).unwrap_err();
        assert!(matches!(err, ConceptError::DatasetParse { .. }));
    }
}
