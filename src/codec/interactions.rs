//! Criteria-interaction extraction and validation.

use std::collections::{HashMap, HashSet};

use super::decode_numeric;
use crate::document::Element;
use crate::domain::{
    CriteriaInteraction, InteractionError, InteractionKind, InteractionSet, NumericValue,
};

/// Extracts and validates every criteria-interaction declaration.
///
/// Declarations live under
/// `criteriaValues[@mcdaConcept="criteriaInteractions"]/criterionValue`.
/// Each must carry a known kind, exactly two distinct criteria from
/// `criteria`, and a non-zero value whose sign matches the kind
/// (weakening negative, strengthening and antagonistic positive).
/// A strengthening and a weakening declaration over the same unordered
/// criterion pair are mutually exclusive, checked incrementally against
/// a pair index as declarations are accepted; antagonistic declarations
/// are exempt in both directions. An empty source block fails outright.
pub fn extract_interactions(
    tree: &Element,
    criteria: &HashSet<String>,
) -> Result<InteractionSet, InteractionError> {
    let declarations = interaction_declarations(tree);
    if declarations.is_empty() {
        return Err(InteractionError::NoneDefined);
    }

    let mut records = Vec::with_capacity(declarations.len());
    let mut kinds_by_pair: HashMap<(String, String), Vec<InteractionKind>> = HashMap::new();
    for declaration in declarations {
        let concept = declaration.attribute("mcdaConcept").unwrap_or_default();
        let kind = InteractionKind::from_concept(concept).ok_or_else(|| {
            InteractionError::UnknownType {
                kind: concept.to_string(),
            }
        })?;

        let involved: Vec<&str> = declaration
            .descendants("criterionID")
            .into_iter()
            .filter_map(Element::text)
            .collect();
        if involved.len() != 2 || involved[0] == involved[1] {
            return Err(InteractionError::WrongCriteriaCount {
                kind,
                count: involved.len(),
            });
        }
        for criterion in &involved {
            if !criteria.contains(*criterion) {
                return Err(InteractionError::UnknownCriterion {
                    criterion: criterion.to_string(),
                    kind,
                });
            }
        }

        let raw = declaration
            .child("value")
            .map(decode_numeric)
            .unwrap_or(NumericValue::Missing);
        let value = match raw.as_f64() {
            Some(v) if v != 0.0 && kind.sign_matches(v) => v,
            _ => return Err(InteractionError::InvalidValue { kind, value: raw }),
        };

        let record = CriteriaInteraction {
            first: involved[0].to_string(),
            second: involved[1].to_string(),
            value,
            kind,
        };
        let (a, b) = record.unordered_pair();
        let key = (a.to_string(), b.to_string());
        if let Some(opposite) = kind.exclusive_opposite() {
            if kinds_by_pair
                .get(&key)
                .is_some_and(|kinds| kinds.contains(&opposite))
            {
                return Err(InteractionError::ConflictingTypes {
                    first: key.0,
                    second: key.1,
                });
            }
        }
        kinds_by_pair.entry(key).or_default().push(kind);
        records.push(record);
    }
    Ok(InteractionSet::new(records))
}

fn interaction_declarations(tree: &Element) -> Vec<&Element> {
    tree.descendants("criteriaValues")
        .into_iter()
        .filter(|block| block.attribute("mcdaConcept") == Some("criteriaInteractions"))
        .flat_map(|block| block.children_named("criterionValue"))
        .collect()
}
