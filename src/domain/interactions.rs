//! Typed criteria-interaction declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a pair of criteria deviates from an additive combined effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Strengthening,
    Weakening,
    Antagonistic,
}

impl InteractionKind {
    /// Parses the `mcdaConcept` spelling of a kind.
    pub fn from_concept(concept: &str) -> Option<Self> {
        match concept {
            "strengthening" => Some(InteractionKind::Strengthening),
            "weakening" => Some(InteractionKind::Weakening),
            "antagonistic" => Some(InteractionKind::Antagonistic),
            _ => None,
        }
    }

    /// Returns the `mcdaConcept` spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionKind::Strengthening => "strengthening",
            InteractionKind::Weakening => "weakening",
            InteractionKind::Antagonistic => "antagonistic",
        }
    }

    /// Returns true when the value's sign is legal for this kind:
    /// weakening is strictly negative, the other two strictly positive.
    pub fn sign_matches(&self, value: f64) -> bool {
        match self {
            InteractionKind::Weakening => value < 0.0,
            InteractionKind::Strengthening | InteractionKind::Antagonistic => value > 0.0,
        }
    }

    /// Returns the kind this one excludes over the same unordered pair,
    /// if any. Antagonistic conflicts with nothing.
    pub fn exclusive_opposite(&self) -> Option<InteractionKind> {
        match self {
            InteractionKind::Strengthening => Some(InteractionKind::Weakening),
            InteractionKind::Weakening => Some(InteractionKind::Strengthening),
            InteractionKind::Antagonistic => None,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated interaction declaration.
///
/// The order of `first` and `second` is the document order, which matters
/// for antagonistic interactions (it designates the affected criterion).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriteriaInteraction {
    pub first: String,
    pub second: String,
    pub value: f64,
    pub kind: InteractionKind,
}

impl CriteriaInteraction {
    /// Returns the unordered criterion pair, lexicographically sorted.
    pub fn unordered_pair(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

/// All validated interactions of one document, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionSet {
    records: Vec<CriteriaInteraction>,
}

impl InteractionSet {
    /// Wraps an already-validated list of records.
    pub fn new(records: Vec<CriteriaInteraction>) -> Self {
        Self { records }
    }

    /// Returns every record in declaration order.
    pub fn records(&self) -> &[CriteriaInteraction] {
        &self.records
    }

    /// Returns the records of one kind, in declaration order.
    pub fn of_kind(&self, kind: InteractionKind) -> Vec<&CriteriaInteraction> {
        self.records.iter().filter(|r| r.kind == kind).collect()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no record is present.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
