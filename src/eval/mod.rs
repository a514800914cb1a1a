//! Amount expression evaluation for declarative configuration values.
//!
//! Amount fields in a project file may be plain numbers or addition-only
//! expressions like `"153 + 123 + 45.67"`. Only digits, decimal points,
//! plus signs, and whitespace are accepted.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::errors::ExpressionError;

/// Evaluates amount values into exact decimals. Stateless; no side effects.
pub struct AmountEvaluator;

impl AmountEvaluator {
    /// Evaluates a JSON amount value.
    ///
    /// Numbers pass through exactly (via their literal text, never an f64
    /// round-trip); strings are parsed as a single number or an additive
    /// expression; anything else is rejected.
    pub fn evaluate(value: &Value) -> Result<Decimal, ExpressionError> {
        match value {
            Value::Number(number) => parse_number_literal(&number.to_string()),
            Value::String(raw) => Self::evaluate_str(raw),
            Value::Null => Err(ExpressionError::UnsupportedValue("null")),
            Value::Bool(_) => Err(ExpressionError::UnsupportedValue("boolean")),
            Value::Array(_) => Err(ExpressionError::UnsupportedValue("array")),
            Value::Object(_) => Err(ExpressionError::UnsupportedValue("object")),
        }
    }

    /// Evaluates a textual amount: a single number, or `N (+ N)*`.
    pub fn evaluate_str(raw: &str) -> Result<Decimal, ExpressionError> {
        let trimmed = raw.trim();

        // A plain numeric literal needs no expression handling.
        if let Ok(value) = Decimal::from_str(trimmed) {
            return Ok(value);
        }

        if !trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_ascii_whitespace() || matches!(ch, '.' | '+'))
        {
            return Err(ExpressionError::InvalidCharacters(trimmed.to_string()));
        }
        if trimmed.starts_with('+') || trimmed.ends_with('+') || trimmed.contains("++") {
            return Err(ExpressionError::MalformedOperators(trimmed.to_string()));
        }

        let terms = extract_numbers(trimmed);
        if terms.is_empty() {
            return Err(ExpressionError::NoNumbers(trimmed.to_string()));
        }

        // Guard against malformed terms like `12.3.4`: every `+`-separated
        // part must correspond to exactly one extracted number.
        if trimmed.split('+').count() != terms.len() {
            return Err(ExpressionError::MalformedStructure(trimmed.to_string()));
        }

        let mut total = Decimal::ZERO;
        for term in terms {
            let value = Decimal::from_str(term).map_err(|_| ExpressionError::InvalidNumber {
                expression: trimmed.to_string(),
                term: term.to_string(),
            })?;
            total += value;
        }
        Ok(total)
    }
}

fn parse_number_literal(literal: &str) -> Result<Decimal, ExpressionError> {
    Decimal::from_str(literal)
        .or_else(|_| Decimal::from_scientific(literal))
        .map_err(|_| ExpressionError::InvalidNumber {
            expression: literal.to_string(),
            term: literal.to_string(),
        })
}

/// Scans `digits(.digits)?` tokens, skipping everything else.
fn extract_numbers(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
            }
            tokens.push(&input[start..i]);
        } else {
            i += 1;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    #[test]
    fn evaluates_plain_numbers() {
        assert_eq!(AmountEvaluator::evaluate(&json!(100)).unwrap(), dec!(100));
        assert_eq!(
            AmountEvaluator::evaluate(&json!(94295.40)).unwrap(),
            dec!(94295.40)
        );
    }

    #[test]
    fn evaluates_numeric_strings() {
        assert_eq!(
            AmountEvaluator::evaluate_str(" 175.5 ").unwrap(),
            dec!(175.5)
        );
        assert_eq!(AmountEvaluator::evaluate_str("0").unwrap(), dec!(0));
    }

    #[test]
    fn evaluates_additive_expressions() {
        assert_eq!(
            AmountEvaluator::evaluate_str("100 + 50.5 + 25").unwrap(),
            dec!(175.5)
        );
        assert_eq!(
            AmountEvaluator::evaluate_str("440000 + 690").unwrap(),
            dec!(440690)
        );
    }

    #[test]
    fn rejects_invalid_characters() {
        assert!(matches!(
            AmountEvaluator::evaluate_str("abc"),
            Err(ExpressionError::InvalidCharacters(_))
        ));
        assert!(matches!(
            AmountEvaluator::evaluate_str("10 - 5"),
            Err(ExpressionError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn rejects_misplaced_operators() {
        assert!(matches!(
            AmountEvaluator::evaluate_str("100 ++ 50"),
            Err(ExpressionError::MalformedOperators(_))
        ));
        assert!(matches!(
            AmountEvaluator::evaluate_str("100 + 50 +"),
            Err(ExpressionError::MalformedOperators(_))
        ));
    }

    #[test]
    fn rejects_spaced_double_operators() {
        assert!(matches!(
            AmountEvaluator::evaluate_str("100 + + 50"),
            Err(ExpressionError::MalformedStructure(_))
        ));
    }

    #[test]
    fn rejects_malformed_terms() {
        assert!(matches!(
            AmountEvaluator::evaluate_str("12.3.4 + 5"),
            Err(ExpressionError::MalformedStructure(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(AmountEvaluator::evaluate_str("").is_err());
        assert!(AmountEvaluator::evaluate_str("   ").is_err());
    }

    #[test]
    fn rejects_unsupported_value_types() {
        assert!(matches!(
            AmountEvaluator::evaluate(&json!(true)),
            Err(ExpressionError::UnsupportedValue("boolean"))
        ));
        assert!(matches!(
            AmountEvaluator::evaluate(&json!(null)),
            Err(ExpressionError::UnsupportedValue("null"))
        ));
    }
}
