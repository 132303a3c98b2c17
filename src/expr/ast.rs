//! Parsed expression form, before type resolution and field binding.

use crate::filter::Condition;

/// A predicate as written in the expression text: the 4-tuple
/// `(kind, key, operator, literal)`, all still strings. Lowering
/// resolves these into a typed [`crate::filter::Predicate`] bound to a
/// field accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPredicate {
    pub kind: String,
    pub key: String,
    pub operator: String,
    pub literal: String,
}

/// Untyped expression tree produced by the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Predicate(RawPredicate),
    Binary {
        condition: Condition,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn predicate(
        kind: impl Into<String>,
        key: impl Into<String>,
        operator: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        Expr::Predicate(RawPredicate {
            kind: kind.into(),
            key: key.into(),
            operator: operator.into(),
            literal: literal.into(),
        })
    }

    pub fn binary(condition: Condition, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            condition,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
