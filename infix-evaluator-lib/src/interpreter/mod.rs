pub mod lexer;
pub mod operator;
pub mod parser;
pub mod syntax;
pub mod token;
pub mod value;

use crate::error::{ExpressionError, Result};
use crate::interpreter::token::Token;
use log::debug;
use serde::Deserialize;
use string_builder::Builder;
use syntax::expression_tree::{Node, MAX_DEPTH};
use syntax::serialized::SerializedNode;
use value::Value;

/// Parses and evaluates the given expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The number or boolean the expression evaluates to.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::evaluate;
/// use infix_evaluator::interpreter::value::Value;
/// # use infix_evaluator::Result;
///
/// # fn main() -> Result<()> {
/// let result = evaluate("3 + 4 * 2 / (1 - 5) + 7")?;
/// assert_eq!(result, Value::Number(8.0));
/// # Ok(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<Value> {
    let tree = parse(expression)?;
    let value = tree.evaluate()?;
    debug!("{} evaluates to {}", tree.print(), value);
    Ok(value)
}

/// Converts the given input string into an equivalent expression tree.
///
/// Whitespace is ignored. Parentheses are checked for balance before anything else.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::parse;
/// # use infix_evaluator::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse("10 + 5")?;
/// assert_eq!(tree.print(), "(10 + 5)");
/// # Ok(()) }
/// ```
pub fn parse(expression: &str) -> Result<Node> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if !is_valid(&stripped) {
        return Err(ExpressionError::InvalidParentheses);
    }

    let tokens = lexer::tokenize(&stripped)?;
    debug!("tokenized {:?} into {} tokens", stripped, tokens.len());
    let tree = parser::parse(tokens)?;
    debug!("parsed {}", tree.print());
    Ok(tree)
}

/// Checks that every `(` has a matching `)` after it. Other characters are ignored.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::is_valid;
///
/// assert!(is_valid("(1 + (2))"));
/// assert!(!is_valid(")("));
/// ```
pub fn is_valid(expression: &str) -> bool {
    let mut open_parentheses = Vec::new();
    for (position, character) in expression.chars().enumerate() {
        match character {
            '(' => open_parentheses.push(position),
            ')' => {
                if open_parentheses.pop().is_none() {
                    return false;
                }
            }
            _ => {}
        }
    }
    open_parentheses.is_empty()
}

/// Rebuilds an expression tree from its serialized form.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::{deserialize, parse};
/// # use infix_evaluator::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse("(2 + 3) < (4 - 1)")?;
/// let rebuilt = deserialize(&tree.serialize());
/// assert_eq!(rebuilt.print(), tree.print());
/// # Ok(()) }
/// ```
pub fn deserialize(serialized: &SerializedNode) -> Node {
    serialized.to_node()
}

/// Rebuilds an expression tree from untyped JSON.
pub fn deserialize_value(value: &serde_json::Value) -> Result<Node> {
    let serialized = SerializedNode::from_json_value(value)?;
    Ok(deserialize(&serialized))
}

/// Rebuilds an expression tree from JSON text, as produced by [`Node::to_json`].
///
/// Text nested deeper than [`MAX_DEPTH`] is rejected before it is parsed.
pub fn deserialize_json(json: &str) -> Result<Node> {
    if json_nesting_depth(json) > MAX_DEPTH {
        return Err(ExpressionError::TooDeep { limit: MAX_DEPTH });
    }

    let malformed =
        |error: serde_json::Error| ExpressionError::MalformedSerialization(error.to_string());
    let mut deserializer = serde_json::Deserializer::from_str(json);
    // Depth is already bounded, and serde_json's own limit of 128 is too tight for long sums.
    deserializer.disable_recursion_limit();
    let value = serde_json::Value::deserialize(&mut deserializer).map_err(malformed)?;
    deserializer.end().map_err(malformed)?;
    deserialize_value(&value)
}

/// How deeply objects and arrays nest in the given JSON text, ignoring brackets in strings.
fn json_nesting_depth(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;
    for character in json.chars() {
        if in_string {
            match character {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match character {
            '"' => in_string = true,
            '{' | '[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

/// Pretty-prints the given tokens, separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::{parse, tokens_to_string};
/// # use infix_evaluator::Result;
///
/// # fn main() -> Result<()> {
/// let tree = parse("1 + 2 * 3")?;
/// assert_eq!(tokens_to_string(&tree.to_postfix()), "1 2 3 * +");
/// # Ok(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut builder = Builder::new(tokens.len() * 2);
    let texts = tokens.iter().map(Token::to_string);
    // Have to use fully qualified syntax here until 'intersperse' is added into stdlib
    itertools::Itertools::intersperse(texts, " ".to_string())
        .for_each(|text| builder.append(text));
    builder.string().unwrap_or_default()
}
