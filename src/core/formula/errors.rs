use thiserror::Error;

/// A formula that cannot be compiled or evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    #[error("formula is empty")]
    Empty,
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },
    #[error("unexpected {found} at position {position}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: usize,
    },
    #[error("unexpected end of formula, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },
    #[error("function '{name}' takes {expected} argument(s), got {found}")]
    WrongArity {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("formula nests deeper than {limit} levels")]
    TooDeep { limit: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in '{operation}'")]
    IntegerOverflow { operation: &'static str },
    #[error("{function}({argument}) is outside the function's domain")]
    Domain {
        function: &'static str,
        argument: f64,
    },
    #[error("'{operation}' produced a non-finite value")]
    NonFinite { operation: &'static str },
}
