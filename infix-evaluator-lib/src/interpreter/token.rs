use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::value::format_number;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
}

pub static SYMBOLS: [char; 9] = ['+', '-', '*', '/', '<', '>', '=', '(', ')'];

impl Token {
    /// Looks up the token for a single symbol character.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParentheses),
            ')' => Some(Token::RightParentheses),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => f.write_str(&format_number(*value)),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
