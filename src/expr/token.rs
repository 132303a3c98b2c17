//! Tokens for lexical analysis of filter expressions.

/// Token categories produced by the tokenizer.
///
/// `Value` is deliberately broad: kind names, field keys, operator
/// symbols and literals all lex as `Value`. The parser assigns meaning
/// by position inside the predicate 4-tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LParen,
    RParen,
    /// Boolean combinator keyword: `and`, `or`, `&&`, `||`.
    Op,
    Comma,
    Value,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
