use crate::error::{ExpressionError, Result};
use crate::interpreter::token::Token;
use crate::interpreter::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;

/// A binary arithmetic or comparison operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "=")]
    Equal,
}

impl BinaryOperator {
    pub fn token(&self) -> Token {
        Token::Operator(*self)
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::LessThan => '<',
            BinaryOperator::GreaterThan => '>',
            BinaryOperator::Equal => '=',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '<' => Some(BinaryOperator::LessThan),
            '>' => Some(BinaryOperator::GreaterThan),
            '=' => Some(BinaryOperator::Equal),
            _ => None,
        }
    }

    /// Comparisons share the additive level, so `1 + 2 < 4` groups as `(1 + 2) < 4`
    /// and `1 < 2 + 3` as `(1 < 2) + 3`.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::LessThan
            | BinaryOperator::GreaterThan
            | BinaryOperator::Equal => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide => 2,
        }
    }

    pub fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    pub fn precedence_ge(&self, other: &Self) -> bool {
        self.precedence().ge(&other.precedence())
    }

    /// Applies the operator to two already evaluated operands.
    ///
    /// Booleans are read as `1` and `0` by the arithmetic and ordering operators,
    /// while `=` compares strictly, so a boolean never equals a number.
    pub fn evaluate(&self, left: Value, right: Value) -> Result<Value> {
        let a = left.as_number();
        let b = right.as_number();
        let value = match self {
            BinaryOperator::Add => Value::Number(a + b),
            BinaryOperator::Subtract => Value::Number(a - b),
            BinaryOperator::Multiply => Value::Number(a * b),
            BinaryOperator::Divide => {
                if right.is_zero() {
                    return Err(ExpressionError::DivisionByZero);
                }
                Value::Number(a / b)
            }
            BinaryOperator::LessThan => Value::Boolean(a < b),
            BinaryOperator::GreaterThan => Value::Boolean(a > b),
            BinaryOperator::Equal => Value::Boolean(left.strict_eq(&right)),
        };
        Ok(value)
    }
}

impl FromStr for BinaryOperator {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<BinaryOperator> {
        let mut symbols = input.chars();
        match (symbols.next(), symbols.next()) {
            (Some(symbol), None) => BinaryOperator::from_symbol(symbol)
                .ok_or_else(|| ExpressionError::UnknownOperator(input.to_string())),
            _ => Err(ExpressionError::UnknownOperator(input.to_string())),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn comparison_shares_precedence_with_addition() {
        let comparison = BinaryOperator::LessThan;
        let addition = BinaryOperator::Add;
        assert!(comparison.precedence_eq(&addition))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Multiply;
        let lesser = BinaryOperator::Equal;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn operator_ge_correspond_with_precedence() {
        let equal1 = BinaryOperator::Subtract;
        let equal2 = BinaryOperator::GreaterThan;
        assert!(equal1.precedence_ge(&equal2))
    }

    #[parameterized(
    symbol = { "+", "-", "*", "/", "<", ">", "=" },
    expected = {
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
    BinaryOperator::LessThan,
    BinaryOperator::GreaterThan,
    BinaryOperator::Equal,
    }
    )]
    fn symbol_parses_to_operator(symbol: &str, expected: BinaryOperator) {
        let operator: BinaryOperator = symbol.parse().unwrap();

        assert_eq!(operator, expected);
        assert_eq!(operator.to_string(), symbol);
    }

    #[parameterized(symbol = { "^", "", "++", "x" })]
    fn unknown_symbol_returns_unknown_operator(symbol: &str) {
        let error = symbol.parse::<BinaryOperator>().unwrap_err();

        assert_eq!(error, ExpressionError::UnknownOperator(symbol.to_string()));
    }

    #[test]
    fn division_by_exactly_zero_fails() {
        let result = BinaryOperator::Divide.evaluate(Value::Number(10.0), Value::Number(0.0));

        assert_eq!(result, Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn division_by_negative_zero_fails() {
        let result = BinaryOperator::Divide.evaluate(Value::Number(1.0), Value::Number(-0.0));

        assert_eq!(result, Err(ExpressionError::DivisionByZero));
    }

    #[test]
    fn booleans_are_coerced_by_arithmetic() {
        let result = BinaryOperator::Add
            .evaluate(Value::Boolean(true), Value::Number(2.0))
            .unwrap();

        assert_eq!(result, Value::Number(3.0));
    }

    #[test]
    fn equality_is_strict_about_kind() {
        let result = BinaryOperator::Equal
            .evaluate(Value::Boolean(true), Value::Number(1.0))
            .unwrap();

        assert_eq!(result, Value::Boolean(false));
    }

    #[test]
    fn ordering_compares_numerically() {
        let result = BinaryOperator::GreaterThan
            .evaluate(Value::Number(10.0), Value::Number(9.0))
            .unwrap();

        assert_eq!(result, Value::Boolean(true));
    }
}
