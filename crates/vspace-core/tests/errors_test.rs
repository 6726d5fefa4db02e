//! Tests for the vspace error handling system.

use std::collections::HashSet;

use vspace_core::errors::*;

#[test]
fn test_concept_error_codes_are_distinct() {
    let errors = [
        ConceptError::InvalidLabel {
            index: 0,
            label: "?".into(),
        },
        ConceptError::MalformedInstance {
            expected: 3,
            found: 2,
        },
        ConceptError::UnknownValue {
            position: 1,
            value: "Z".into(),
        },
        ConceptError::EmptyTrainingSet,
        ConceptError::NonSingletonSpecific { size: 0 },
        ConceptError::DatasetParse {
            message: "eof".into(),
        },
    ];
    let codes: HashSet<&str> = errors.iter().map(|e| e.error_code()).collect();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_coded_string_format() {
    let err = ConceptError::MalformedInstance {
        expected: 10,
        found: 9,
    };
    assert_eq!(
        err.coded_string(),
        "[MALFORMED_INSTANCE] Malformed instance: expected 10 attributes, found 9"
    );

    let err = ConfigError::FileNotFound {
        path: "/nowhere".into(),
    };
    assert!(err.coded_string().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn test_invalid_label_message_names_example() {
    let err = ConceptError::InvalidLabel {
        index: 4,
        label: "*".into(),
    };
    assert_eq!(err.to_string(), "Invalid label \"*\" on example 4");
}
