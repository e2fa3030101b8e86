use crate::error::{ExpressionError, Result};
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;
use std::collections::VecDeque;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
///
/// Operators of equal precedence are popped before the incoming one is pushed,
/// so every operator groups left to right.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens, in infix order, with balanced parentheses.
///
/// returns: The same numbers and operators in postfix order, without parentheses.
pub fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut tokens: VecDeque<Token> = VecDeque::from(infix_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        trace!("shunting {:?}, operator stack {:?}", token, operators);
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParentheses => operators.push_front(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(ExpressionError::InvalidParentheses);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop_front() {
            // Balance is checked before conversion, so this only happens on unchecked input.
            None => return Err(ExpressionError::InvalidParentheses),
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(&Token::Operator(top_of_operator_stack)) = operators.front() {
        if !top_of_operator_stack.precedence_ge(&operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop_front() {
            output.push(other_operator_token);
        }
    }

    operators.push_front(operator.token());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn operator(symbol: &str) -> Token {
        Token::Operator(symbol.parse().unwrap())
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![number(1.0), operator("+"), number(2.0)];
        let postfix = vec![number(1.0), number(2.0), operator("+")];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = vec![
            number(1.0),
            operator("-"),
            Token::LeftParentheses,
            number(2.0),
            operator("+"),
            number(3.0),
            Token::RightParentheses,
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            operator("+"),
            operator("-"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_complex_expression() {
        // 3 + 4 * 2 / (1 - 5) + 7
        let infix = vec![
            number(3.0),
            operator("+"),
            number(4.0),
            operator("*"),
            number(2.0),
            operator("/"),
            Token::LeftParentheses,
            number(1.0),
            operator("-"),
            number(5.0),
            Token::RightParentheses,
            operator("+"),
            number(7.0),
        ];
        let postfix = vec![
            number(3.0),
            number(4.0),
            number(2.0),
            operator("*"),
            number(1.0),
            number(5.0),
            operator("-"),
            operator("/"),
            operator("+"),
            number(7.0),
            operator("+"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = vec![
            number(1.0),
            operator("+"),
            number(2.0),
            operator("*"),
            number(3.0),
            operator("-"),
            number(4.0),
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            operator("*"),
            operator("+"),
            number(4.0),
            operator("-"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn comparison_pops_pending_addition() {
        // 1 + 2 < 4
        let infix = vec![
            number(1.0),
            operator("+"),
            number(2.0),
            operator("<"),
            number(4.0),
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            operator("+"),
            number(4.0),
            operator("<"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = vec![
            number(1.0),
            operator("+"),
            Token::LeftParentheses,
            Token::LeftParentheses,
            number(2.0),
            operator("+"),
            number(3.0),
            Token::RightParentheses,
            operator("*"),
            number(4.0),
            Token::RightParentheses,
        ];
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            operator("+"),
            number(4.0),
            operator("*"),
            operator("+"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn empty_parentheses_produce_no_output() {
        let infix = vec![Token::LeftParentheses, Token::RightParentheses];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, Vec::<Token>::new())
    }

    #[test]
    fn infix_to_postfix_unmatched_closing_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = vec![
            Token::LeftParentheses,
            number(1.0),
            operator("+"),
            number(2.0),
            Token::RightParentheses,
            Token::RightParentheses,
        ];

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, ExpressionError::InvalidParentheses)
    }

    #[test]
    fn infix_to_postfix_unmatched_opening_parenthesis_should_return_err() {
        // (1 + 2
        let infix = vec![
            Token::LeftParentheses,
            number(1.0),
            operator("+"),
            number(2.0),
        ];

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, ExpressionError::InvalidParentheses)
    }
}
