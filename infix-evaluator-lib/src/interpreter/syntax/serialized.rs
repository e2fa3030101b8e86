use crate::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::{Node, MAX_DEPTH};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

pub const NUMBER_NODE_TAG: &str = "NumberNode";
pub const BINARY_OPERATION_NODE_TAG: &str = "BinaryOperationNode";

/// A plain-data projection of an expression tree, tagged by node type.
///
/// In JSON a leaf reads `{"type": "NumberNode", "value": 2.0}` and an operation reads
/// `{"type": "BinaryOperationNode", "operator": "+", "left": {..}, "right": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SerializedNode {
    #[serde(rename = "NumberNode")]
    Number { value: f64 },
    #[serde(rename = "BinaryOperationNode")]
    BinaryOperation {
        operator: BinaryOperator,
        left: Box<SerializedNode>,
        right: Box<SerializedNode>,
    },
}

impl SerializedNode {
    /// Rebuilds the expression tree, children first.
    pub fn to_node(&self) -> Node {
        match self {
            SerializedNode::Number { value } => Node::new_number(*value),
            SerializedNode::BinaryOperation {
                operator,
                left,
                right,
            } => {
                let left_operand = left.to_node();
                let right_operand = right.to_node();
                Node::new_binary_operation(*operator, left_operand, right_operand)
            }
        }
    }

    /// Reads a serialized node out of untyped JSON, reporting unknown node types and
    /// operators by name. Trees deeper than [`MAX_DEPTH`] are rejected.
    pub fn from_json_value(value: &JsonValue) -> Result<SerializedNode> {
        SerializedNode::read_json_node(value, 1)
    }

    fn read_json_node(value: &JsonValue, depth: usize) -> Result<SerializedNode> {
        if depth > MAX_DEPTH {
            return Err(ExpressionError::TooDeep { limit: MAX_DEPTH });
        }
        let tag = value
            .get("type")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| malformed("missing string field 'type'"))?;

        match tag {
            NUMBER_NODE_TAG => {
                let number = value
                    .get("value")
                    .ok_or_else(|| malformed("missing field 'value'"))?;
                // Non-finite numbers are written as null.
                let number = match number {
                    JsonValue::Null => f64::NAN,
                    number => number
                        .as_f64()
                        .ok_or_else(|| malformed("field 'value' is not a number"))?,
                };
                Ok(SerializedNode::Number { value: number })
            }
            BINARY_OPERATION_NODE_TAG => {
                let operator = value
                    .get("operator")
                    .and_then(JsonValue::as_str)
                    .ok_or_else(|| malformed("missing string field 'operator'"))?
                    .parse::<BinaryOperator>()?;
                let left = value
                    .get("left")
                    .ok_or_else(|| malformed("missing field 'left'"))?;
                let right = value
                    .get("right")
                    .ok_or_else(|| malformed("missing field 'right'"))?;
                Ok(SerializedNode::BinaryOperation {
                    operator,
                    left: Box::new(SerializedNode::read_json_node(left, depth + 1)?),
                    right: Box::new(SerializedNode::read_json_node(right, depth + 1)?),
                })
            }
            unknown => Err(ExpressionError::UnrecognizedNodeType(unknown.to_string())),
        }
    }
}

fn malformed(reason: &str) -> ExpressionError {
    ExpressionError::MalformedSerialization(reason.to_string())
}
