//! Codec module - Pure decode/encode passes over element trees.
//!
//! Each function is a stateless pass: it reads a parsed tree plus
//! caller-supplied identifier universes and returns one typed result, or
//! builds a document fragment from typed data. Nothing here performs I/O.

mod comparisons;
mod interactions;
mod numeric;
mod parameters;
mod profiles;
mod serialize;

pub use comparisons::{
    distillation_intersection, parse_comparisons, DISTILLATION_INTERSECTION_CONCEPT,
};
pub use interactions::extract_interactions;
pub use numeric::decode_numeric;
pub use parameters::check_cut_threshold;
pub use profiles::resolve_profiles;
pub use serialize::{affectations_to_element, comparisons_to_element};
