//! Numeric value variants carried by comparison pairs and interactions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A decoded XMCDA numeric value.
///
/// Rationals are collapsed to floating point at decode time; precision
/// loss is accepted. `Missing` marks a decode failure or an absent value
/// node and is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    Integer(i64),
    Real(f64),
    Rational(f64),
    NotApplicable,
    Missing,
}

impl NumericValue {
    /// Returns the value as a float, if it carries one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NumericValue::Integer(i) => Some(*i as f64),
            NumericValue::Real(r) | NumericValue::Rational(r) => Some(*r),
            NumericValue::NotApplicable | NumericValue::Missing => None,
        }
    }

    /// Returns true for the `Missing` marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, NumericValue::Missing)
    }

    /// Returns true for the `NA` marker.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, NumericValue::NotApplicable)
    }

    /// Returns true when the value carries a number.
    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(i) => write!(f, "{}", i),
            NumericValue::Real(r) | NumericValue::Rational(r) => write!(f, "{}", r),
            NumericValue::NotApplicable => write!(f, "NA"),
            NumericValue::Missing => write!(f, "missing"),
        }
    }
}
