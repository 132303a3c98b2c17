//! Value model: the closed set of value kinds, the comparison operators
//! legal for each kind, and the AND/OR combinator condition.

use chrono::{DateTime, Utc};
use std::fmt;

/// Absolute tolerance for approximate numeric equality.
///
/// Two numbers compare equal iff their difference is within this bound.
/// The `OrEqual` ordering operators fold in the same tolerance.
pub const NUMBER_EPSILON: f64 = 1e-5;

/// The kinds of values a predicate can compare. Fixed, closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Datetime,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Datetime => "datetime",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A runtime value, tagged with its kind.
///
/// All numeric representations are promoted to `f64` on construction so
/// that integer and floating-point fields compare under one rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Datetime(DateTime<Utc>),
}

impl Value {
    pub fn string(val: impl Into<String>) -> Self {
        Value::String(val.into())
    }

    pub fn number(val: impl Into<f64>) -> Self {
        Value::Number(val.into())
    }

    pub fn datetime(val: DateTime<Utc>) -> Self {
        Value::Datetime(val)
    }

    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Number(_) => ValueKind::Number,
            Value::Datetime(_) => ValueKind::Datetime,
        }
    }
}

/// Comparison operators supported by predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Contain,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl Operator {
    /// Whether this operator is legal for the given value kind.
    ///
    /// Strings support equality and substring containment only; numbers
    /// and datetimes support equality and the four orderings, but not
    /// containment.
    pub fn is_legal_for(&self, kind: ValueKind) -> bool {
        match kind {
            ValueKind::String => matches!(
                self,
                Operator::Contain | Operator::Equal | Operator::NotEqual
            ),
            ValueKind::Number | ValueKind::Datetime => !matches!(self, Operator::Contain),
        }
    }

    /// Get the display string for this operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Contain => "contain",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the results of several predicates or subtrees combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    And,
    Or,
}
