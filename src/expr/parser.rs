//! Recursive-descent parser over the token stream.

use crate::expr::ast::{Expr, RawPredicate};
use crate::expr::error::ParseError;
use crate::expr::token::{Token, TokenKind};
use crate::expr::tokenizer::tokenize;
use crate::filter::Condition;

/// Builds an [`Expr`] from a fully parenthesized expression string.
///
/// Every expression is `'(' inner ')'` where the inner part is either a
/// predicate 4-tuple or `Expr op Expr`; seeing `(` after the opening
/// paren is what distinguishes the two, so one token of lookahead is
/// enough.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> Self {
        Self::from_tokens(tokenize(input))
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole input as a single expression.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expr()?;
        if self.position < self.tokens.len() {
            return Err(ParseError::TrailingTokens {
                position: self.position,
            });
        }
        Ok(expr)
    }

    fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LParen, "'('")?;
        let expr = self.parse_inner()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(expr)
    }

    fn parse_inner(&mut self) -> Result<Expr, ParseError> {
        match self.peek() {
            Some(TokenKind::LParen) => {
                let left = self.parse_expr()?;
                let condition = self.parse_condition()?;
                let right = self.parse_expr()?;
                Ok(Expr::binary(condition, left, right))
            }
            Some(TokenKind::Value) => self.parse_predicate(),
            _ => Err(self.unexpected("a nested expression or a predicate")),
        }
    }

    fn parse_predicate(&mut self) -> Result<Expr, ParseError> {
        let kind = self.expect_value("a value kind")?;
        self.expect(TokenKind::Comma, "','")?;
        let key = self.expect_value("a field key")?;
        self.expect(TokenKind::Comma, "','")?;
        let operator = self.expect_value("an operator symbol")?;
        self.expect(TokenKind::Comma, "','")?;
        let literal = self.expect_value("a literal")?;

        Ok(Expr::Predicate(RawPredicate {
            kind,
            key,
            operator,
            literal,
        }))
    }

    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        match self.peek() {
            Some(TokenKind::Op) => {
                let token = self.advance();
                match token.text.as_str() {
                    "and" | "&&" => Ok(Condition::And),
                    "or" | "||" => Ok(Condition::Or),
                    // Unreachable: the tokenizer only emits Op for these words.
                    _ => Err(ParseError::UnknownOperator(token.text)),
                }
            }
            _ => Err(self.unexpected("'and' or 'or'")),
        }
    }

    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.position).map(|t| t.kind)
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        self.position += 1;
        token
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        match self.peek() {
            Some(found) if found == kind => Ok(self.advance()),
            _ => Err(self.unexpected(expected)),
        }
    }

    fn expect_value(&mut self, expected: &'static str) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Value, expected)?.text)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.tokens.get(self.position) {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.text.clone(),
                position: self.position,
            },
            None => ParseError::UnexpectedEnd { expected },
        }
    }
}
