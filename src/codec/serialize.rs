//! Deterministic serialization of matrices and affectations.

use crate::document::Element;
use crate::domain::{
    AlternativeAffectation, ComparisonEntry, ComparisonError, ComparisonMatrix, NumericValue,
};

/// Re-encodes a comparison matrix as an `alternativesComparisons` fragment.
///
/// Exactly two comparable groups are accepted. The emitted pair order is
/// derived from the groups alone, never from the matrix's iteration
/// order: identical groups produce the full nested cross-product
/// (self-pairs included); distinct groups produce every `(a, b)` forward
/// pair followed by every `(b, a)` backward pair. Pairs the ordering rule
/// produces but the matrix lacks are skipped; matrix pairs the rule never
/// produces are never emitted.
pub fn comparisons_to_element(
    matrix: &ComparisonMatrix,
    comparables: &[Vec<String>],
    partial: bool,
    concept: Option<&str>,
) -> Result<Element, ComparisonError> {
    if comparables.len() != 2 {
        return Err(ComparisonError::TooManyGroups {
            count: comparables.len(),
        });
    }

    let mut root = Element::new("alternativesComparisons");
    if let Some(concept) = concept {
        root = root.with_attribute("mcdaConcept", concept);
    }

    let mut pairs = Element::new("pairs");
    for (initial, terminal) in pair_ordering(&comparables[0], &comparables[1]) {
        let Some(entry) = matrix.get(initial, terminal) else {
            continue;
        };
        let mut pair = Element::new("pair")
            .with_child(
                Element::new("initial")
                    .with_child(Element::new("alternativeID").with_text(initial)),
            )
            .with_child(
                Element::new("terminal")
                    .with_child(Element::new("alternativeID").with_text(terminal)),
            );
        match (partial, entry) {
            (false, ComparisonEntry::Scalar(value)) => {
                pair.add_child(Element::new("value").with_child(numeric_to_element(*value)));
            }
            (true, ComparisonEntry::Partial(values)) => {
                let mut wrapper = Element::new("values");
                for (criterion, value) in values {
                    wrapper.add_child(
                        Element::new("value")
                            .with_attribute("id", criterion)
                            .with_child(numeric_to_element(*value)),
                    );
                }
                pair.add_child(wrapper);
            }
            // A matrix is entirely one mode; a mismatched entry cannot
            // occur for matrices built by this crate's parser.
            _ => continue,
        }
        pairs.add_child(pair);
    }
    Ok(root.with_child(pairs))
}

/// Encodes category-interval assignments as an `alternativesAffectations`
/// fragment, in input order.
pub fn affectations_to_element(affectations: &[AlternativeAffectation]) -> Element {
    let mut root = Element::new("alternativesAffectations");
    for affectation in affectations {
        root.add_child(
            Element::new("alternativeAffectation")
                .with_child(Element::new("alternativeID").with_text(&affectation.alternative))
                .with_child(
                    Element::new("categoriesInterval")
                        .with_child(Element::new("lowerBound").with_child(
                            Element::new("categoryID").with_text(&affectation.lower_bound),
                        ))
                        .with_child(Element::new("upperBound").with_child(
                            Element::new("categoryID").with_text(&affectation.upper_bound),
                        )),
                ),
        );
    }
    root
}

fn pair_ordering<'a>(
    group_a: &'a [String],
    group_b: &'a [String],
) -> Vec<(&'a str, &'a str)> {
    if group_a == group_b {
        // e.g. alternatives vs alternatives, self-pairs included
        group_a
            .iter()
            .flat_map(|a| group_a.iter().map(move |b| (a.as_str(), b.as_str())))
            .collect()
    } else {
        // e.g. alternatives vs profiles: forward block, then backward block
        let forward = group_a
            .iter()
            .flat_map(|a| group_b.iter().map(move |b| (a.as_str(), b.as_str())));
        let backward = group_b
            .iter()
            .flat_map(|b| group_a.iter().map(move |a| (b.as_str(), a.as_str())));
        forward.chain(backward).collect()
    }
}

fn numeric_to_element(value: NumericValue) -> Element {
    match value {
        NumericValue::Integer(i) => Element::new("integer").with_text(i.to_string()),
        NumericValue::Real(r) | NumericValue::Rational(r) => {
            Element::new("real").with_text(r.to_string())
        }
        NumericValue::NotApplicable | NumericValue::Missing => Element::new("NA"),
    }
}
