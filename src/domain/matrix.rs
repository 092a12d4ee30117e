//! Sparse pairwise comparison matrices.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::NumericValue;

/// The value attached to one ordered `(initial, terminal)` pair.
///
/// A matrix is entirely `Scalar` (full mode) or entirely `Partial`
/// (per-criterion breakdown); the mode is chosen at parse time, never
/// inferred. Partial entries keep their sub-values in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ComparisonEntry {
    Scalar(NumericValue),
    Partial(Vec<(String, NumericValue)>),
}

impl ComparisonEntry {
    /// Returns the scalar value of a full-mode entry.
    pub fn scalar(&self) -> Option<NumericValue> {
        match self {
            ComparisonEntry::Scalar(value) => Some(*value),
            ComparisonEntry::Partial(_) => None,
        }
    }

    /// Returns the sub-value for a criterion in a partial-mode entry.
    pub fn criterion(&self, id: &str) -> Option<NumericValue> {
        match self {
            ComparisonEntry::Scalar(_) => None,
            ComparisonEntry::Partial(values) => values
                .iter()
                .find(|(criterion, _)| criterion == id)
                .map(|(_, value)| *value),
        }
    }
}

/// A sparse mapping `initial -> terminal -> entry`.
///
/// Lookup order is irrelevant; serialization order is driven entirely by
/// the comparable groups handed to the serializer, so plain hash maps
/// suffice here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    rows: HashMap<String, HashMap<String, ComparisonEntry>>,
}

impl ComparisonMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry for an ordered pair, replacing any previous one.
    pub fn insert(
        &mut self,
        initial: impl Into<String>,
        terminal: impl Into<String>,
        entry: ComparisonEntry,
    ) {
        self.rows
            .entry(initial.into())
            .or_default()
            .insert(terminal.into(), entry);
    }

    /// Returns the entry for an ordered pair, if present.
    pub fn get(&self, initial: &str, terminal: &str) -> Option<&ComparisonEntry> {
        self.rows.get(initial).and_then(|row| row.get(terminal))
    }

    /// Returns true if the ordered pair has an entry.
    pub fn contains(&self, initial: &str, terminal: &str) -> bool {
        self.get(initial, terminal).is_some()
    }

    /// Returns the number of populated pairs.
    pub fn pair_count(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Returns true if no pair is populated.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns every initial identifier with at least one entry.
    pub fn initials(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }
}
