//! Error types for expression parsing and lowering.

use crate::filter::{FilterError, ValueKind};
use thiserror::Error;

/// Errors raised while parsing expression text or lowering the parsed
/// form into a bound filter tree. Any of these rejects the whole
/// expression; no partial trees are ever produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unexpected end of expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected token {found:?} at position {position}, expected {expected}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: usize,
    },

    #[error("trailing input after the expression at position {position}")]
    TrailingTokens { position: usize },

    #[error("unknown value kind keyword {0:?}")]
    UnknownKind(String),

    #[error("unknown operator symbol {0:?}")]
    UnknownOperator(String),

    #[error("field key {0:?} is not a column index")]
    InvalidFieldKey(String),

    #[error("malformed {kind} literal {text:?}")]
    MalformedLiteral { kind: ValueKind, text: String },

    #[error(transparent)]
    Filter(#[from] FilterError),
}
