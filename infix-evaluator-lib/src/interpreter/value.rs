use std::fmt;
use std::fmt::{Display, Formatter};

/// The result of evaluating an expression.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
}

impl Value {
    /// The numeric reading of the value. Booleans read as `1` and `0`.
    pub fn as_number(&self) -> f64 {
        match self {
            Value::Number(value) => *value,
            Value::Boolean(true) => 1.0,
            Value::Boolean(false) => 0.0,
        }
    }

    /// True only for the number zero (of either sign). `false` is not zero.
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, Value::Number(value) if *value == 0.0)
    }

    /// Equality that requires both values to be of the same kind.
    pub(crate) fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(value) => f.write_str(&format_number(*value)),
            Value::Boolean(value) => write!(f, "{}", value),
        }
    }
}

/// Shortest decimal form that reads back to the same number, without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".into()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".into()
        } else {
            "-Infinity".into()
        }
    } else if value == 0.0 {
        // Covers negative zero too.
        "0".into()
    } else {
        format!("{}", value)
    }
}
