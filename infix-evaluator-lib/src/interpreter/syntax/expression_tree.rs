use crate::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::serialized::SerializedNode;
use crate::interpreter::syntax::syntax_visitor::{walk_binary_operation, SyntaxVisitor};
use crate::interpreter::token::Token;
use crate::interpreter::value::{format_number, Value};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(f64),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Node::BinaryOperation { .. })
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::Number(_) => None,
            Node::BinaryOperation { operator, .. } => Some(*operator),
        }
    }

    /// Evaluates the tree, left operand before right operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_evaluator::interpreter::syntax::expression_tree::Node;
    /// use infix_evaluator::interpreter::value::Value;
    /// # use infix_evaluator::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let tree = Node::new_binary_operation("<".parse()?, Node::new_number(1.0), Node::new_number(2.0));
    /// assert_eq!(tree.evaluate()?, Value::Boolean(true));
    /// # Ok(()) }
    /// ```
    pub fn evaluate(&self) -> Result<Value> {
        match self {
            Node::Number(value) => Ok(Value::Number(*value)),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => {
                let left = left_operand.evaluate()?;
                let right = right_operand.evaluate()?;
                operator.evaluate(left, right)
            }
        }
    }

    /// Renders the tree fully parenthesized, with single spaces around each operator.
    pub fn print(&self) -> String {
        match self {
            Node::Number(value) => format_number(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => format!(
                "({} {} {})",
                left_operand.print(),
                operator,
                right_operand.print()
            ),
        }
    }

    pub fn serialize(&self) -> SerializedNode {
        match self {
            Node::Number(value) => SerializedNode::Number { value: *value },
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => SerializedNode::BinaryOperation {
                operator: *operator,
                left: Box::new(left_operand.serialize()),
                right: Box::new(right_operand.serialize()),
            },
        }
    }

    /// The serialized form of the tree as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.serialize())
            .map_err(|error| ExpressionError::MalformedSerialization(error.to_string()))
    }

    /// The tokens of the tree in postfix order, i.e. in the order they are evaluated.
    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: vec![] };
        self.accept(&mut visitor);
        visitor.tokens
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

/// The deepest tree that parsing or deserialization will build, counted in nodes from the
/// root down to the deepest leaf.
///
/// Evaluating, printing and (de)serializing a tree all walk it recursively.
pub const MAX_DEPTH: usize = 512;

/// Generates an expression tree based off of the given tokens.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree, or [`ExpressionError::TooDeep`] if
/// it would be deeper than [`MAX_DEPTH`].
pub fn new_tree(mut tokens: Vec<Token>) -> Result<Node> {
    tokens.reverse();
    // Each operand is kept together with its depth.
    let mut operands: Vec<(Node, usize)> = Vec::new();

    while let Some(token) = tokens.pop() {
        match token {
            Token::Number(value) => operands.push((Node::new_number(value), 1)),
            Token::Operator(operator) => {
                let insufficient_operands = || ExpressionError::InsufficientOperands {
                    operator: operator.to_string(),
                };
                let (operand_two, depth_two) = operands.pop().ok_or_else(insufficient_operands)?;
                let (operand_one, depth_one) = operands.pop().ok_or_else(insufficient_operands)?;

                let depth = depth_one.max(depth_two) + 1;
                if depth > MAX_DEPTH {
                    return Err(ExpressionError::TooDeep { limit: MAX_DEPTH });
                }
                operands.push((
                    Node::new_binary_operation(operator, operand_one, operand_two),
                    depth,
                ));
            }
            // There should not be any parenthesis present in postfix input.
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ExpressionError::InvalidParentheses)
            }
        }
    }

    match operands.pop() {
        Some((root, _)) if operands.is_empty() => Ok(root),
        Some(_) => Err(ExpressionError::InvalidExpression {
            remaining: operands.len() + 1,
        }),
        None => Err(ExpressionError::InvalidExpression { remaining: 0 }),
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, value: f64) {
        self.builder.add_empty_child(format_number(value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_number(&mut self, value: f64) {
        self.tokens.push(Token::Number(value));
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand);
        self.tokens.push(operator.token());
    }
}
