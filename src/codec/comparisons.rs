//! Comparison-matrix parsing.

use std::collections::HashSet;

use tracing::debug;

use super::decode_numeric;
use crate::document::Element;
use crate::domain::{ComparisonEntry, ComparisonError, ComparisonMatrix, NumericValue};

/// The `mcdaConcept` label marking a precomputed binary outranking
/// relation, usable in place of a plain outranking matrix.
pub const DISTILLATION_INTERSECTION_CONCEPT: &str =
    "Intersection of upwards and downwards distillation";

/// Parses the comparisons block matching `concept` into a sparse matrix.
///
/// With no `concept`, the first `alternativesComparisons` block is used;
/// a missing match is `ComparisonError::BlockNotFound` (callers wanting a
/// fallback source must catch it, see [`distillation_intersection`]).
/// Pairs whose `initial` or `terminal` falls outside `endpoints` are
/// dropped, not errors: heterogeneous document reuse makes stray
/// endpoints expected noise. In partial mode each pair carries one
/// sub-value per criterion, kept in document order.
pub fn parse_comparisons(
    tree: &Element,
    endpoints: &HashSet<String>,
    concept: Option<&str>,
    partial: bool,
) -> Result<ComparisonMatrix, ComparisonError> {
    let block = find_comparisons_block(tree, concept).ok_or_else(|| {
        ComparisonError::BlockNotFound {
            concept: concept.map(str::to_string),
        }
    })?;

    let mut matrix = ComparisonMatrix::new();
    for pair in block.find_all("pairs/pair") {
        let (Some(initial), Some(terminal)) = (
            pair.find_text("initial/alternativeID"),
            pair.find_text("terminal/alternativeID"),
        ) else {
            debug!("dropping pair with missing endpoint identifiers");
            continue;
        };
        if !endpoints.contains(initial) || !endpoints.contains(terminal) {
            debug!(initial, terminal, "dropping pair outside the endpoint universe");
            continue;
        }
        let entry = if partial {
            ComparisonEntry::Partial(decode_partial_values(pair))
        } else {
            ComparisonEntry::Scalar(
                pair.child("value")
                    .map(decode_numeric)
                    .unwrap_or(NumericValue::Missing),
            )
        };
        matrix.insert(initial, terminal, entry);
    }
    Ok(matrix)
}

/// Resolves the precomputed distillation-intersection block, if present.
///
/// Returns `None` when no block carries the fixed concept label; callers
/// then fall back to [`parse_comparisons`]. Every retained pair gets the
/// binary value `1.0`; pairs absent from the result are simply not in
/// the intersection. Endpoints are restricted to `alternatives` only --
/// profiles are never valid here.
pub fn distillation_intersection(
    tree: &Element,
    alternatives: &HashSet<String>,
) -> Option<ComparisonMatrix> {
    let block = find_comparisons_block(tree, Some(DISTILLATION_INTERSECTION_CONCEPT))?;

    let mut matrix = ComparisonMatrix::new();
    for pair in block.find_all("pairs/pair") {
        let (Some(initial), Some(terminal)) = (
            pair.find_text("initial/alternativeID"),
            pair.find_text("terminal/alternativeID"),
        ) else {
            continue;
        };
        if alternatives.contains(initial) && alternatives.contains(terminal) {
            matrix.insert(initial, terminal, ComparisonEntry::Scalar(NumericValue::Real(1.0)));
        }
    }
    Some(matrix)
}

fn find_comparisons_block<'a>(tree: &'a Element, concept: Option<&str>) -> Option<&'a Element> {
    let blocks = tree.descendants("alternativesComparisons");
    match concept {
        Some(c) => blocks
            .into_iter()
            .find(|block| block.attribute("mcdaConcept") == Some(c)),
        None => blocks.into_iter().next(),
    }
}

fn decode_partial_values(pair: &Element) -> Vec<(String, NumericValue)> {
    let Some(values) = pair.child("values") else {
        return Vec::new();
    };
    values
        .children_named("value")
        .map(|value| {
            (
                value.attribute("id").unwrap_or_default().to_string(),
                decode_numeric(value),
            )
        })
        .collect()
}
