//! Style-sheet custom properties
//!
//! Every token becomes one custom property declaration inside a single `:root` block, in
//! collection order.
//!
//! ## Format
//!
//! - Name: `--` + path segments joined by `-`, lower-cased, anything outside `[a-z0-9-]` replaced
//!   by `-`
//! - color: normalized to `rgb(r, g, b)` or `rgba(r, g, b, a)`; unparseable text passes through
//! - dimension: a bare number gets `px`; values that already carry a unit pass through
//! - everything else: the textual form of the value
//!
//! ## Example
//!
//! ```text
//! :root {
//!   --color-brand-primary: rgb(79, 70, 229);
//!   --space-md: 16px;
//! }
//! ```

use crate::error::FormatError;
use crate::format::Format;
use swatch_core::swatch::coercion;
use swatch_core::swatch::token::value::display_text;
use swatch_core::swatch::{TokenRecord, TokenSet, TokenType};

/// Format implementation for `:root` custom properties
pub struct CssFormat;

impl Format for CssFormat {
    fn name(&self) -> &str {
        "css"
    }

    fn description(&self) -> &str {
        "Custom properties in a single :root block"
    }

    fn file_extension(&self) -> &str {
        "css"
    }

    fn serialize(&self, tokens: &TokenSet) -> Result<String, FormatError> {
        let mut output = String::from(":root {\n");
        for record in tokens {
            output.push_str(&format!(
                "  {}: {};\n",
                variable_name(&record.path),
                property_value(record)
            ));
        }
        output.push_str("}\n");
        Ok(output)
    }
}

/// Custom property name for a token path
pub fn variable_name(path: &[String]) -> String {
    let sanitized: String = path
        .join("-")
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '-',
        })
        .collect();
    format!("--{}", sanitized)
}

/// Declared value of a token
pub fn property_value(record: &TokenRecord) -> String {
    let text = display_text(&record.value);
    match record.token_type {
        TokenType::Color => match coercion::color(&text) {
            Some(color) => color.to_rgb_string(),
            None => text.into_owned(),
        },
        TokenType::Dimension if coercion::is_unitless_number(&text) => format!("{}px", text),
        _ => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{json, Value};

    fn record(path: &str, token_type: TokenType, value: Value) -> TokenRecord {
        TokenRecord::new(
            path.split('.').map(String::from).collect(),
            token_type,
            value,
        )
    }

    #[rstest]
    #[case("color.brand.primary", "--color-brand-primary")]
    #[case("Color.Brand", "--color-brand")]
    #[case("space.2xl", "--space-2xl")]
    #[case("radius.card_lg", "--radius-card-lg")]
    #[case("font.family body", "--font-family-body")]
    #[case("a.b-c", "--a-b-c")]
    fn test_variable_name(#[case] path: &str, #[case] expected: &str) {
        let path: Vec<String> = path.split('.').map(String::from).collect();
        assert_eq!(variable_name(&path), expected);
    }

    #[rstest]
    #[case(TokenType::Color, json!("#4F46E5"), "rgb(79, 70, 229)")]
    #[case(TokenType::Color, json!("#00000080"), "rgba(0, 0, 0, 0.5)")]
    #[case(TokenType::Color, json!("rebeccapurple"), "rgb(102, 51, 153)")]
    #[case(TokenType::Color, json!("not-a-color"), "not-a-color")]
    #[case(TokenType::Color, json!("{missing}"), "{missing}")]
    #[case(TokenType::Dimension, json!("16"), "16px")]
    #[case(TokenType::Dimension, json!(12), "12px")]
    #[case(TokenType::Dimension, json!("1.5"), "1.5px")]
    #[case(TokenType::Dimension, json!("1.5rem"), "1.5rem")]
    #[case(TokenType::Dimension, json!("-4"), "-4")]
    #[case(TokenType::FontWeight, json!("700"), "700")]
    #[case(TokenType::FontFamily, json!(["Inter", "sans-serif"]), "Inter,sans-serif")]
    #[case(TokenType::String, json!(true), "true")]
    #[case(TokenType::Other("shadow".into()), json!("0 1px 2px"), "0 1px 2px")]
    fn test_property_value(
        #[case] token_type: TokenType,
        #[case] value: Value,
        #[case] expected: &str,
    ) {
        assert_eq!(property_value(&record("t", token_type, value)), expected);
    }

    #[test]
    fn test_serialize_empty() {
        let output = CssFormat.serialize(&TokenSet::new()).unwrap();
        assert_eq!(output, ":root {\n}\n");
    }

    #[test]
    fn test_serialize_keeps_collection_order() {
        let tokens: TokenSet = [
            record("space.md", TokenType::Dimension, json!("16px")),
            record("color.text", TokenType::Color, json!("#111827")),
        ]
        .into_iter()
        .collect();

        let output = CssFormat.serialize(&tokens).unwrap();
        assert_eq!(
            output,
            ":root {\n  --space-md: 16px;\n  --color-text: rgb(17, 24, 39);\n}\n"
        );
    }
}
