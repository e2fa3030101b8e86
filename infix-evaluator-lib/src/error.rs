use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExpressionError>;

/// Everything that can go wrong while parsing, evaluating or deserializing an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("Invalid parentheses: every '(' needs a matching ')'")]
    InvalidParentheses,
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: char, position: usize },
    #[error("Insufficient operands for operator '{operator}'")]
    InsufficientOperands { operator: String },
    #[error("Invalid expression: expected a single root, found {remaining} nodes")]
    InvalidExpression { remaining: usize },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("Unrecognized node type '{0}'")]
    UnrecognizedNodeType(String),
    #[error("Malformed serialized node: {0}")]
    MalformedSerialization(String),
    #[error("Expression is nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}
