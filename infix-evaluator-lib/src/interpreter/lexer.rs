use crate::error::{ExpressionError, Result};
use crate::interpreter::token::Token;
use std::iter::Peekable;
use std::str::CharIndices;

/// Splits a whitespace-free expression into tokens.
///
/// # Arguments
///
/// * `expression`: The expression text, with all whitespace already removed.
///
/// returns: The tokens of the expression, in infix order.
///
/// # Examples
///
/// ```
/// use infix_evaluator::interpreter::lexer::tokenize;
/// use infix_evaluator::interpreter::token::Token;
/// # use infix_evaluator::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("1+2")?;
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], Token::Number(1.0));
/// # Ok(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    // Positions are counted in characters, not bytes.
    let mut characters = expression.chars().enumerate().peekable();

    while let Some(&(position, character)) = characters.peek() {
        if is_numeric(character) {
            let mut run = String::new();
            while let Some(&(_, next)) = characters.peek() {
                if !is_numeric(next) {
                    break;
                }
                run.push(next);
                characters.next();
            }
            tokens.push(Token::Number(parse_leading_decimal(&run)));
            continue;
        }

        let token = Token::from_symbol(character).ok_or(ExpressionError::UnexpectedToken {
            token: character,
            position,
        })?;
        tokens.push(token);
        characters.next();
    }

    Ok(tokens)
}

fn is_numeric(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Reads the longest prefix of `run` that is a decimal number and ignores the rest,
/// so `"1.2.3"` reads as `1.2`. A run without any digit reads as NaN.
pub(crate) fn parse_leading_decimal(run: &str) -> f64 {
    let mut characters: Peekable<CharIndices> = run.char_indices().peekable();
    let mut end = 0;
    let mut has_digits = false;

    while let Some(&(index, character)) = characters.peek() {
        if !character.is_ascii_digit() {
            break;
        }
        has_digits = true;
        end = index + 1;
        characters.next();
    }

    if let Some(&(index, '.')) = characters.peek() {
        end = index + 1;
        characters.next();
        while let Some(&(index, character)) = characters.peek() {
            if !character.is_ascii_digit() {
                break;
            }
            has_digits = true;
            end = index + 1;
            characters.next();
        }
    }

    if !has_digits {
        return f64::NAN;
    }
    run[..end].parse::<f64>().unwrap_or(f64::NAN)
}
