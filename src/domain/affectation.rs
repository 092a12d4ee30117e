//! Alternative-to-category-interval assignments.

use serde::{Deserialize, Serialize};

/// The category interval an assignment procedure placed an alternative in.
///
/// `lower_bound` comes from the descending (pessimistic, conjunctive) pass
/// and `upper_bound` from the ascending (optimistic, disjunctive) pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternativeAffectation {
    pub alternative: String,
    pub lower_bound: String,
    pub upper_bound: String,
}

impl AlternativeAffectation {
    /// Creates an affectation record.
    pub fn new(
        alternative: impl Into<String>,
        lower_bound: impl Into<String>,
        upper_bound: impl Into<String>,
    ) -> Self {
        Self {
            alternative: alternative.into(),
            lower_bound: lower_bound.into(),
            upper_bound: upper_bound.into(),
        }
    }
}
