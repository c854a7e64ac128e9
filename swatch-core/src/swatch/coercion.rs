//! Per-type literal coercion
//!
//! Emitters turn resolved token text into target literals. The parsing half of that work is the
//! same for every target and lives here; the emitters only decide how the parsed value is spelled.
//!
//! | type       | parsed as                                        | fallback        |
//! |------------|--------------------------------------------------|-----------------|
//! | color      | [`Rgba::parse`]                                  | target specific |
//! | dimension  | leading `-?\d+(\.\d+)?` prefix (`12px` → 12)     | `0`             |
//! | fontWeight | leading base-10 integer (`600`, ` 700`, `500.5`) | `400`           |
//!
//! Fallbacks never fail the run; [`coercion_diagnostics`] reports where they kick in.

use crate::swatch::color::Rgba;
use crate::swatch::diagnostics::{Diagnostic, Diagnostics};
use crate::swatch::token::value::display_text;
use crate::swatch::token::{TokenSet, TokenType};
use once_cell::sync::Lazy;
use regex::Regex;

/// Value used when a dimension has no numeric prefix
pub const DEFAULT_DIMENSION: f64 = 0.0;

/// Value used when a font weight has no integer prefix
pub const DEFAULT_FONT_WEIGHT: i64 = 400;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?").unwrap());
static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());
static UNITLESS_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

/// Leading numeric prefix of a dimension (`"1.5rem"` → 1.5)
///
/// A prefix too large for `f64` counts as no number at all.
pub fn dimension_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text)
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .filter(|number| number.is_finite())
}

/// Leading integer of a font weight (`"600"` → 600, `"bold"` → None)
pub fn font_weight(text: &str) -> Option<i64> {
    LEADING_INTEGER
        .captures(text)
        .and_then(|captures| captures[1].parse().ok())
}

/// Whether a dimension is a bare number that needs a unit appended
pub fn is_unitless_number(text: &str) -> bool {
    UNITLESS_NUMBER.is_match(text)
}

/// Parsed color, if the text is one
pub fn color(text: &str) -> Option<Rgba> {
    Rgba::parse(text)
}

/// One `unrepresentable-value` diagnostic per record whose value falls back to a default
pub fn coercion_diagnostics(tokens: &TokenSet) -> Vec<Diagnostic> {
    let mut diagnostics = Diagnostics::new();
    for record in tokens {
        let text = display_text(&record.value);
        let problem = match record.token_type {
            TokenType::Color if color(&text).is_none() => {
                Some(format!("'{}' is not a color; using black", text))
            }
            TokenType::Dimension if dimension_number(&text).is_none() => Some(format!(
                "'{}' has no numeric value; using {}",
                text, DEFAULT_DIMENSION
            )),
            TokenType::FontWeight if font_weight(&text).is_none() => Some(format!(
                "'{}' is not an integer weight; using {}",
                text, DEFAULT_FONT_WEIGHT
            )),
            _ => None,
        };
        if let Some(message) = problem {
            diagnostics.push(Diagnostic::unrepresentable(&record.key(), message));
        }
    }
    diagnostics.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch::token::TokenRecord;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("12", Some(12.0))]
    #[case("12px", Some(12.0))]
    #[case("1.5rem", Some(1.5))]
    #[case("-4px", Some(-4.0))]
    #[case("0.125", Some(0.125))]
    #[case("12.px", Some(12.0))]
    #[case(".5rem", None)]
    #[case("+4px", None)]
    #[case("auto", None)]
    #[case("{space.sm}", None)]
    #[case("", None)]
    fn test_dimension_number(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(dimension_number(input), expected);
    }

    #[test]
    fn test_dimension_number_overflow() {
        let huge = format!("{}px", "9".repeat(400));
        assert_eq!(dimension_number(&huge), None);
        assert_eq!(dimension_number(&format!("-{}", "9".repeat(400))), None);
    }

    #[rstest]
    #[case("600", Some(600))]
    #[case(" 700", Some(700))]
    #[case("-100", Some(-100))]
    #[case("500.5", Some(500))]
    #[case("300px", Some(300))]
    #[case("0", Some(0))]
    #[case("bold", None)]
    #[case("", None)]
    #[case("99999999999999999999999", None)]
    fn test_font_weight(#[case] input: &str, #[case] expected: Option<i64>) {
        assert_eq!(font_weight(input), expected);
    }

    #[rstest]
    #[case("12", true)]
    #[case("12.5", true)]
    #[case("12px", false)]
    #[case("-12", false)]
    #[case("1.", false)]
    #[case("", false)]
    fn test_is_unitless_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_unitless_number(input), expected);
    }

    #[test]
    fn test_coercion_diagnostics() {
        let tokens: TokenSet = vec![
            TokenRecord::new(vec!["ok".into()], TokenType::Color, json!("#fff")),
            TokenRecord::new(vec!["bad".into(), "color".into()], TokenType::Color, json!("{missing}")),
            TokenRecord::new(vec!["bad".into(), "size".into()], TokenType::Dimension, json!("auto")),
            TokenRecord::new(vec!["bad".into(), "weight".into()], TokenType::FontWeight, json!("bold")),
            TokenRecord::new(vec!["huge".into()], TokenType::Dimension, json!("9".repeat(400))),
            TokenRecord::new(vec!["weight".into()], TokenType::FontWeight, json!(600)),
            TokenRecord::new(vec!["label".into()], TokenType::String, json!("anything")),
        ]
        .into_iter()
        .collect();

        let diagnostics = coercion_diagnostics(&tokens);
        let keys: Vec<_> = diagnostics.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["bad.color", "bad.size", "bad.weight", "huge"]);
        assert_eq!(
            diagnostics[1].message,
            "'auto' has no numeric value; using 0"
        );
    }
}
