//! Tolerant numeric-value decoding.

use crate::document::Element;
use crate::domain::NumericValue;

/// Decodes the numeric content of a value node.
///
/// The first structurally present alternative wins, in fixed priority
/// order: `integer`, `real`, `rational` (numerator/denominator), `NA`.
/// Absent alternatives, unparseable text, and a zero denominator all
/// resolve to `Missing`; this decoder never fails.
pub fn decode_numeric(node: &Element) -> NumericValue {
    if let Some(integer) = node.child("integer") {
        return match integer.text().and_then(|t| t.trim().parse::<i64>().ok()) {
            Some(value) => NumericValue::Integer(value),
            None => NumericValue::Missing,
        };
    }
    if let Some(real) = node.child("real") {
        return match real.text().and_then(|t| t.trim().parse::<f64>().ok()) {
            Some(value) => NumericValue::Real(value),
            None => NumericValue::Missing,
        };
    }
    if let Some(rational) = node.child("rational") {
        let numerator = rational
            .find_text("numerator")
            .and_then(|t| t.trim().parse::<f64>().ok());
        let denominator = rational
            .find_text("denominator")
            .and_then(|t| t.trim().parse::<f64>().ok());
        return match (numerator, denominator) {
            (Some(_), Some(d)) if d == 0.0 => NumericValue::Missing,
            (Some(n), Some(d)) => NumericValue::Rational(n / d),
            _ => NumericValue::Missing,
        };
    }
    if node.child("NA").is_some() {
        return NumericValue::NotApplicable;
    }
    NumericValue::Missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_node(kind: &str, text: &str) -> Element {
        Element::new("value").with_child(Element::new(kind).with_text(text))
    }

    fn rational_node(numerator: &str, denominator: &str) -> Element {
        Element::new("value").with_child(
            Element::new("rational")
                .with_child(Element::new("numerator").with_text(numerator))
                .with_child(Element::new("denominator").with_text(denominator)),
        )
    }

    #[test]
    fn decodes_integer() {
        assert_eq!(decode_numeric(&value_node("integer", "42")), NumericValue::Integer(42));
        assert_eq!(decode_numeric(&value_node("integer", "-3")), NumericValue::Integer(-3));
    }

    #[test]
    fn decodes_real() {
        assert_eq!(decode_numeric(&value_node("real", "0.75")), NumericValue::Real(0.75));
    }

    #[test]
    fn decodes_rational_as_float() {
        assert_eq!(decode_numeric(&rational_node("1", "4")), NumericValue::Rational(0.25));
    }

    #[test]
    fn decodes_na_marker() {
        let node = Element::new("value").with_child(Element::new("NA"));
        assert_eq!(decode_numeric(&node), NumericValue::NotApplicable);
    }

    #[test]
    fn integer_takes_priority_over_real() {
        let node = Element::new("value")
            .with_child(Element::new("integer").with_text("2"))
            .with_child(Element::new("real").with_text("0.5"));
        assert_eq!(decode_numeric(&node), NumericValue::Integer(2));
    }

    #[test]
    fn malformed_text_is_missing() {
        assert_eq!(decode_numeric(&value_node("integer", "two")), NumericValue::Missing);
        assert_eq!(decode_numeric(&value_node("real", "")), NumericValue::Missing);
    }

    #[test]
    fn matched_alternative_wins_even_when_malformed() {
        // A broken integer never falls through to a well-formed real.
        let node = Element::new("value")
            .with_child(Element::new("integer").with_text("oops"))
            .with_child(Element::new("real").with_text("0.5"));
        assert_eq!(decode_numeric(&node), NumericValue::Missing);
    }

    #[test]
    fn zero_denominator_is_missing() {
        assert_eq!(decode_numeric(&rational_node("1", "0")), NumericValue::Missing);
    }

    #[test]
    fn incomplete_rational_is_missing() {
        let node = Element::new("value").with_child(
            Element::new("rational").with_child(Element::new("numerator").with_text("1")),
        );
        assert_eq!(decode_numeric(&node), NumericValue::Missing);
    }

    #[test]
    fn empty_node_is_missing() {
        assert_eq!(decode_numeric(&Element::new("value")), NumericValue::Missing);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert_eq!(decode_numeric(&value_node("real", " 0.5 ")), NumericValue::Real(0.5));
    }
}
