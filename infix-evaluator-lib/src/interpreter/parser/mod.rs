pub mod infix_converter;

use crate::error::Result;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::syntax::expression_tree;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::debug;

/// Parses the given infix tokens into an equivalent expression tree,
/// which is easier to evaluate than the original tokens.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use infix_evaluator::Result;
/// # fn main() -> Result<()> {
/// use infix_evaluator::interpreter::parser::parse;
/// use infix_evaluator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number(2.0),
///     Token::Operator("*".parse()?),
///     Token::Number(3.0),
/// ];
/// let tree = parse(infix_tokens)?;
/// assert_eq!(tree.print(), "(2 * 3)");
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Node> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("postfix: {:?}", postfix_tokens);
    let tree = expression_tree::new_tree(postfix_tokens)?;
    Ok(tree)
}
