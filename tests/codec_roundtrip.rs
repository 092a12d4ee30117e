//! End-to-end codec tests: parse/serialize round trips and ordering
//! determinism over whole documents.

use std::collections::HashSet;

use proptest::prelude::*;

use xmcda_codec::codec::{
    comparisons_to_element, distillation_intersection, parse_comparisons, resolve_profiles,
    DISTILLATION_INTERSECTION_CONCEPT,
};
use xmcda_codec::document::Element;
use xmcda_codec::domain::{
    ComparisonEntry, ComparisonMatrix, ComparisonMode, NumericValue, ProfileSet,
};

fn endpoints(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn group(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn wrap(fragment: Element) -> Element {
    Element::new("XMCDA").with_child(fragment)
}

#[test]
fn full_mode_matrix_survives_a_round_trip() {
    let alternatives = group(&["a1", "a2"]);
    let profiles = group(&["p1"]);

    let mut matrix = ComparisonMatrix::new();
    matrix.insert("a1", "p1", ComparisonEntry::Scalar(NumericValue::Real(0.9)));
    matrix.insert("a2", "p1", ComparisonEntry::Scalar(NumericValue::Real(0.8)));
    matrix.insert("p1", "a1", ComparisonEntry::Scalar(NumericValue::Real(0.2)));
    matrix.insert("p1", "a2", ComparisonEntry::Scalar(NumericValue::Integer(1)));

    let groups = vec![alternatives, profiles];
    let fragment = comparisons_to_element(&matrix, &groups, false, Some("concordance")).unwrap();

    let reparsed = parse_comparisons(
        &wrap(fragment),
        &endpoints(&["a1", "a2", "p1"]),
        Some("concordance"),
        false,
    )
    .unwrap();

    assert_eq!(reparsed, matrix);
}

#[test]
fn partial_mode_matrix_survives_a_round_trip() {
    let mut matrix = ComparisonMatrix::new();
    matrix.insert(
        "a1",
        "a2",
        ComparisonEntry::Partial(vec![
            ("g1".to_string(), NumericValue::Real(0.4)),
            ("g2".to_string(), NumericValue::NotApplicable),
        ]),
    );
    matrix.insert(
        "a2",
        "a1",
        ComparisonEntry::Partial(vec![("g1".to_string(), NumericValue::Real(0.6))]),
    );

    let groups = vec![group(&["a1", "a2"]), group(&["a1", "a2"])];
    let fragment = comparisons_to_element(&matrix, &groups, true, None).unwrap();

    let reparsed =
        parse_comparisons(&wrap(fragment), &endpoints(&["a1", "a2"]), None, true).unwrap();

    assert_eq!(reparsed, matrix);
}

#[test]
fn outranking_falls_back_from_distillation_to_plain_comparisons() {
    // Document with a plain outranking block only: the distillation
    // resolver declines and the caller falls back to the parser.
    let plain = Element::new("alternativesComparisons").with_child(
        Element::new("pairs").with_child(
            Element::new("pair")
                .with_child(
                    Element::new("initial")
                        .with_child(Element::new("alternativeID").with_text("a1")),
                )
                .with_child(
                    Element::new("terminal")
                        .with_child(Element::new("alternativeID").with_text("a2")),
                )
                .with_child(
                    Element::new("value").with_child(Element::new("real").with_text("1")),
                ),
        ),
    );
    let tree = wrap(plain);
    let universe = endpoints(&["a1", "a2"]);

    let outranking = match distillation_intersection(&tree, &universe) {
        Some(matrix) => matrix,
        None => parse_comparisons(&tree, &universe, None, false).unwrap(),
    };
    assert_eq!(
        outranking.get("a1", "a2").unwrap().scalar(),
        Some(NumericValue::Real(1.0))
    );
}

#[test]
fn distillation_block_wins_over_plain_comparisons() {
    let mut distillation =
        Element::new("alternativesComparisons").with_attribute(
            "mcdaConcept",
            DISTILLATION_INTERSECTION_CONCEPT,
        );
    distillation.add_child(
        Element::new("pairs").with_child(
            Element::new("pair")
                .with_child(
                    Element::new("initial")
                        .with_child(Element::new("alternativeID").with_text("a2")),
                )
                .with_child(
                    Element::new("terminal")
                        .with_child(Element::new("alternativeID").with_text("a1")),
                ),
        ),
    );
    let tree = wrap(distillation);
    let universe = endpoints(&["a1", "a2"]);

    let outranking = distillation_intersection(&tree, &universe)
        .expect("distillation block should be recognized");
    assert_eq!(outranking.pair_count(), 1);
    assert_eq!(
        outranking.get("a2", "a1").unwrap().scalar(),
        Some(NumericValue::Real(1.0))
    );
}

#[test]
fn resolved_profiles_feed_the_endpoint_universe() {
    let tree = wrap(
        Element::new("categoriesProfiles")
            .with_child(
                Element::new("categoryProfile")
                    .with_child(Element::new("alternativeID").with_text("pBM")),
            )
            .with_child(
                Element::new("categoryProfile")
                    .with_child(Element::new("alternativeID").with_text("pMG")),
            ),
    );
    let profiles = resolve_profiles(&tree, ComparisonMode::BoundaryProfiles).unwrap();
    assert_eq!(profiles, ProfileSet::Boundary(vec!["pBM".into(), "pMG".into()]));

    let mut universe = endpoints(&["a1"]);
    universe.extend(profiles.profile_ids().iter().map(|s| s.to_string()));
    assert!(universe.contains("pMG"));
    assert_eq!(universe.len(), 3);
}

proptest! {
    #[test]
    fn serialization_order_is_independent_of_insertion_order(
        values in prop::collection::vec(0.0f64..1.0, 9),
        order in Just((0..9usize).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let ids = ["a1", "a2", "a3"];
        let groups = vec![group(&ids), group(&ids)];

        let mut natural = ComparisonMatrix::new();
        for (k, value) in values.iter().enumerate() {
            natural.insert(
                ids[k / 3],
                ids[k % 3],
                ComparisonEntry::Scalar(NumericValue::Real(*value)),
            );
        }
        let mut shuffled = ComparisonMatrix::new();
        for &k in &order {
            shuffled.insert(
                ids[k / 3],
                ids[k % 3],
                ComparisonEntry::Scalar(NumericValue::Real(values[k])),
            );
        }

        let a = comparisons_to_element(&natural, &groups, false, None).unwrap();
        let b = comparisons_to_element(&shuffled, &groups, false, None).unwrap();
        prop_assert_eq!(a.to_xml(), b.to_xml());
    }
}
