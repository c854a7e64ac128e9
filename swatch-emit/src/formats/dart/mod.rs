//! Typed constant container for the Flutter side
//!
//! Tokens are bucketed by type into one class of `static const` members. Each bucket keeps
//! collection order and the buckets are emitted colors, doubles, ints, strings. Empty buckets
//! contribute no lines.
//!
//! ## Literals
//!
//! | token type | member type | literal                                          |
//! |------------|-------------|--------------------------------------------------|
//! | color      | `Color`     | `Color(0xAARRGGBB)`, opaque black when unparsable |
//! | dimension  | `double`    | leading number with two decimals, else `0.00`     |
//! | fontWeight | `int`       | leading integer, else `400`                       |
//! | other      | `String`    | double-quoted, `\`, `"` and `$` escaped           |
//!
//! ## Example
//!
//! ```text
//! // GENERATED FILE. Do not edit by hand.
//! // Source: tokens/tokens.json
//!
//! import 'package:flutter/material.dart';
//!
//! class AppTokens {
//!   static const Color color_brand = Color(0xFF4F46E5);
//!   static const double space_md = 16.00;
//! }
//! ```

use crate::error::FormatError;
use crate::format::Format;
use swatch_core::swatch::coercion::{self, DEFAULT_DIMENSION, DEFAULT_FONT_WEIGHT};
use swatch_core::swatch::color::Rgba;
use swatch_core::swatch::token::value::display_text;
use swatch_core::swatch::{TokenRecord, TokenSet, TokenType};

const SCALE_HELPER: &str = "class TokenScale {
  TokenScale._();

  static double hairline(BuildContext context) =>
      1.0 / MediaQuery.of(context).devicePixelRatio;
}
";

/// Settings for the generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartOptions {
    /// Name of the generated class
    pub class_name: String,
    /// Shown in the `// Source:` header line
    pub source_label: String,
    /// Append the `TokenScale` hairline helper class
    pub scale_helper: bool,
}

impl Default for DartOptions {
    fn default() -> Self {
        Self {
            class_name: "AppTokens".to_string(),
            source_label: "tokens/tokens.json".to_string(),
            scale_helper: false,
        }
    }
}

/// Format implementation for the typed Dart class
#[derive(Debug, Clone, Default)]
pub struct DartFormat {
    options: DartOptions,
}

impl DartFormat {
    pub fn new(options: DartOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DartOptions {
        &self.options
    }
}

impl Format for DartFormat {
    fn name(&self) -> &str {
        "dart"
    }

    fn description(&self) -> &str {
        "Typed static constants for Flutter"
    }

    fn file_extension(&self) -> &str {
        "dart"
    }

    fn serialize(&self, tokens: &TokenSet) -> Result<String, FormatError> {
        let mut buckets = Buckets::default();
        for record in tokens {
            buckets.push(record)?;
        }

        let mut output = format!(
            "// GENERATED FILE. Do not edit by hand.\n// Source: {}\n\nimport 'package:flutter/material.dart';\n\n",
            self.options.source_label
        );
        output.push_str(&format!("class {} {{\n", self.options.class_name));
        for line in buckets
            .colors
            .iter()
            .chain(&buckets.doubles)
            .chain(&buckets.ints)
            .chain(&buckets.strings)
        {
            output.push_str(line);
            output.push('\n');
        }
        output.push_str("}\n");

        if self.options.scale_helper {
            output.push('\n');
            output.push_str(SCALE_HELPER);
        }
        Ok(output)
    }
}

#[derive(Default)]
struct Buckets {
    colors: Vec<String>,
    doubles: Vec<String>,
    ints: Vec<String>,
    strings: Vec<String>,
}

impl Buckets {
    fn push(&mut self, record: &TokenRecord) -> Result<(), FormatError> {
        let name = identifier(&record.path);
        let text = display_text(&record.value);
        match record.token_type {
            TokenType::Color => {
                let color = coercion::color(&text).unwrap_or(Rgba::BLACK);
                self.colors.push(format!(
                    "  static const Color {} = Color({});",
                    name,
                    color.to_argb_hex()
                ));
            }
            TokenType::Dimension => {
                let number = coercion::dimension_number(&text).unwrap_or(DEFAULT_DIMENSION);
                self.doubles
                    .push(format!("  static const double {} = {:.2};", name, number));
            }
            TokenType::FontWeight => {
                let weight = coercion::font_weight(&text).unwrap_or(DEFAULT_FONT_WEIGHT);
                self.ints
                    .push(format!("  static const int {} = {};", name, weight));
            }
            _ => {
                self.strings.push(format!(
                    "  static const String {} = {};",
                    name,
                    string_literal(&text)?
                ));
            }
        }
        Ok(())
    }
}

/// Member identifier for a token path
///
/// Segments are joined by `_`, anything outside `[A-Za-z0-9_]` becomes `_`, and a leading digit
/// gets a `_` prefix.
pub fn identifier(path: &[String]) -> String {
    let sanitized: String = path
        .join("_")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}", sanitized)
    } else {
        sanitized
    }
}

/// Double-quoted string literal; `$` is escaped so Dart does not interpolate
pub fn string_literal(text: &str) -> Result<String, FormatError> {
    Ok(serde_json::to_string(text)?.replace('$', "\\$"))
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

    fn members(tokens: TokenSet) -> Vec<String> {
        DartFormat::default()
            .serialize(&tokens)
            .unwrap()
            .lines()
            .filter(|line| line.starts_with("  static const"))
            .map(String::from)
            .collect()
    }

    #[rstest]
    #[case("color.brand.primary", "color_brand_primary")]
    #[case("space.2xl", "space_2xl")]
    #[case("2xl.space", "_2xl_space")]
    #[case("color.brand-hover", "color_brand_hover")]
    #[case("Font.Body", "Font_Body")]
    fn test_identifier(#[case] path: &str, #[case] expected: &str) {
        let path: Vec<String> = path.split('.').map(String::from).collect();
        assert_eq!(identifier(&path), expected);
    }

    #[rstest]
    #[case("Inter", r#""Inter""#)]
    #[case("say \"hi\"", r#""say \"hi\"""#)]
    #[case(r"C:\fonts", r#""C:\\fonts""#)]
    #[case("$price", r#""\$price""#)]
    #[case("line\nbreak", r#""line\nbreak""#)]
    fn test_string_literal(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(string_literal(text).unwrap(), expected);
    }

    #[rstest]
    #[case(TokenType::Color, json!("#4F46E5"), "static const Color t = Color(0xFF4F46E5);")]
    #[case(TokenType::Color, json!("#00000080"), "static const Color t = Color(0x80000000);")]
    #[case(TokenType::Color, json!("{missing}"), "static const Color t = Color(0xFF000000);")]
    #[case(TokenType::Dimension, json!("16px"), "static const double t = 16.00;")]
    #[case(TokenType::Dimension, json!("1.5rem"), "static const double t = 1.50;")]
    #[case(TokenType::Dimension, json!(12), "static const double t = 12.00;")]
    #[case(TokenType::Dimension, json!("-2px"), "static const double t = -2.00;")]
    #[case(TokenType::Dimension, json!("auto"), "static const double t = 0.00;")]
    #[case(TokenType::Dimension, json!("9".repeat(400)), "static const double t = 0.00;")]
    #[case(TokenType::FontWeight, json!("600"), "static const int t = 600;")]
    #[case(TokenType::FontWeight, json!("bold"), "static const int t = 400;")]
    #[case(TokenType::FontFamily, json!(["Inter", "sans-serif"]), r#"static const String t = "Inter,sans-serif";"#)]
    #[case(TokenType::String, json!(false), r#"static const String t = "false";"#)]
    fn test_member_literal(
        #[case] token_type: TokenType,
        #[case] value: Value,
        #[case] expected: &str,
    ) {
        let tokens: TokenSet = [record("t", token_type, value)].into_iter().collect();
        assert_eq!(members(tokens), vec![format!("  {}", expected)]);
    }

    #[test]
    fn test_buckets_are_ordered_by_type() {
        let tokens: TokenSet = [
            record("label", TokenType::String, json!("Hi")),
            record("weight", TokenType::FontWeight, json!("700")),
            record("gap", TokenType::Dimension, json!("8px")),
            record("ink", TokenType::Color, json!("#111827")),
        ]
        .into_iter()
        .collect();

        let names: Vec<String> = members(tokens)
            .iter()
            .map(|line| line.split_whitespace().nth(3).unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, vec!["ink", "gap", "weight", "label"]);
    }

    #[test]
    fn test_empty_buckets_are_omitted() {
        let tokens: TokenSet = [record("gap", TokenType::Dimension, json!("8px"))]
            .into_iter()
            .collect();

        let output = DartFormat::default().serialize(&tokens).unwrap();
        assert!(output.ends_with("class AppTokens {\n  static const double gap = 8.00;\n}\n"));
    }

    #[test]
    fn test_scale_helper_is_opt_in() {
        let tokens = TokenSet::new();
        let plain = DartFormat::default().serialize(&tokens).unwrap();
        assert!(!plain.contains("TokenScale"));

        let helper = DartFormat::new(DartOptions {
            scale_helper: true,
            ..DartOptions::default()
        })
        .serialize(&tokens)
        .unwrap();
        assert!(helper.ends_with(SCALE_HELPER));
        assert!(helper.contains("class AppTokens {\n}\n\nclass TokenScale {"));
    }
}
