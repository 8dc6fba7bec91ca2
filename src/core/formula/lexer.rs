use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::core::formula::errors::FormulaError;
use crate::core::formula::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Value),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(Value::Int(value)) => write!(f, "number {value}"),
            Self::Number(Value::Real(value)) => write!(f, "number {value}"),
            Self::Ident(name) => write!(f, "identifier '{name}'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Percent => write!(f, "'%'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Comma => write!(f, "','"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

pub fn tokenize(src: &str) -> Result<Vec<SpannedToken>, FormulaError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(position, ch)) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            _ if is_ident_start(ch) => {
                tokens.push(SpannedToken {
                    token: Token::Ident(take_while(&mut chars, is_ident_continue)),
                    position,
                });
                continue;
            }
            _ if ch.is_ascii_digit() || ch == '.' => {
                tokens.push(SpannedToken {
                    token: Token::Number(lex_number(&mut chars, position)?),
                    position,
                });
                continue;
            }
            _ => {
                return Err(FormulaError::UnexpectedCharacter {
                    character: ch,
                    position,
                });
            }
        };

        chars.next();
        tokens.push(SpannedToken { token, position });
    }

    Ok(tokens)
}

fn lex_number(
    chars: &mut Peekable<CharIndices<'_>>,
    position: usize,
) -> Result<Value, FormulaError> {
    let mut literal = take_while(chars, |c| c.is_ascii_digit());
    let mut is_real = false;

    if let Some(&(_, '.')) = chars.peek() {
        chars.next();
        is_real = true;
        literal.push('.');
        literal.push_str(&take_while(chars, |c| c.is_ascii_digit()));
    }

    if let Some(&(_, marker @ ('e' | 'E'))) = chars.peek() {
        chars.next();
        is_real = true;
        literal.push(marker);

        if let Some(&(_, sign @ ('+' | '-'))) = chars.peek() {
            chars.next();
            literal.push(sign);
        }

        literal.push_str(&take_while(chars, |c| c.is_ascii_digit()));
    }

    let invalid = |literal: String| FormulaError::InvalidNumber { literal, position };

    if is_real {
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Value::Real(value)),
            _ => Err(invalid(literal)),
        }
    } else {
        literal
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| invalid(literal))
    }
}

fn take_while(chars: &mut Peekable<CharIndices<'_>>, predicate: impl Fn(char) -> bool) -> String {
    let mut taken = String::new();

    while let Some(&(_, c)) = chars.peek() {
        if !predicate(c) {
            break;
        }
        taken.push(c);
        chars.next();
    }

    taken
}

fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_ident_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
