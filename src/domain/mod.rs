//! Domain module - Typed decision-analysis data.
//!
//! Value objects for pairwise comparison matrices, reference profiles,
//! criteria interactions, and category affectations, plus the error
//! vocabulary of the codec. Everything here is an immutable snapshot
//! built once per extraction.

mod affectation;
mod errors;
mod interactions;
mod matrix;
mod numeric;
mod profiles;

pub use affectation::AlternativeAffectation;
pub use errors::{ComparisonError, InteractionError, ParameterError, ProfileError};
pub use interactions::{CriteriaInteraction, InteractionKind, InteractionSet};
pub use matrix::{ComparisonEntry, ComparisonMatrix};
pub use numeric::NumericValue;
pub use profiles::{ComparisonMode, ProfileSet};
