//! Textual filter expressions: tokenizer, recursive-descent parser, and
//! lowering of the parsed form into a bound [`crate::filter::FilterTree`].
//!
//! The grammar is fully parenthesized, so nesting is always explicit and
//! no precedence rules are needed:
//!
//! ```text
//! Expr      := '(' InnerExpr ')'
//! InnerExpr := Predicate | Expr Op Expr
//! Predicate := ValueKind ',' FieldKey ',' OperatorSym ',' Literal
//! ```

pub mod ast;
pub mod error;
pub mod lower;
pub mod parser;
pub mod token;
pub mod tokenizer;

pub use ast::{Expr, RawPredicate};
pub use error::ParseError;
pub use lower::{compile, lower, DEFAULT_DATETIME_LAYOUT};
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
