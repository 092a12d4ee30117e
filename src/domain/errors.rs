//! Error types for the codec's extraction and serialization passes.
//!
//! Lookup failures (a required block is absent) and validation failures
//! (structurally present but semantically invalid) abort the current
//! extraction. Numeric decode tolerance is not represented here; it
//! resolves to `NumericValue::Missing` instead.

use thiserror::Error;

use super::{InteractionKind, NumericValue};

/// Errors from comparison-matrix parsing and serialization.
#[derive(Debug, Clone, Error)]
pub enum ComparisonError {
    #[error("No alternativesComparisons block found{}", match concept {
        Some(c) => format!(" for mcdaConcept '{}'", c),
        None => String::new(),
    })]
    BlockNotFound { concept: Option<String> },

    #[error("Expected exactly two comparable groups, got {count}")]
    TooManyGroups { count: usize },
}

/// Errors from reference-profile resolution.
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("Unsupported comparison mode '{mode}'")]
    UnsupportedMode { mode: String },
}

/// Errors from criteria-interaction extraction.
#[derive(Debug, Clone, Error)]
pub enum InteractionError {
    #[error("Unknown interaction type '{kind}'")]
    UnknownType { kind: String },

    #[error("'{kind}' interaction must name exactly two distinct criteria, got {count}")]
    WrongCriteriaCount { kind: InteractionKind, count: usize },

    #[error("Unknown criterion '{criterion}' in '{kind}' interaction")]
    UnknownCriterion {
        criterion: String,
        kind: InteractionKind,
    },

    #[error("Invalid value {value} for '{kind}' interaction")]
    InvalidValue {
        kind: InteractionKind,
        value: NumericValue,
    },

    #[error("'strengthening' and 'weakening' interactions are mutually exclusive, both given for criteria '{first}' and '{second}'")]
    ConflictingTypes { first: String, second: String },

    #[error("Wrong or missing definitions for criteria interactions")]
    NoneDefined,
}

/// Errors from method-parameter checks.
#[derive(Debug, Clone, Error)]
pub enum ParameterError {
    #[error("Cut threshold should be in range <0.0, 1.0>, got {value}")]
    CutThresholdOutOfRange { value: f64 },
}
