//! Single typed comparison: operator + declared kind + literal value.

use crate::filter::error::FilterError;
use crate::filter::model::{Operator, Value, ValueKind, NUMBER_EPSILON};
use chrono::{DateTime, Utc};

/// The smallest unit of a filter: one operator applied to one literal.
///
/// A predicate is validated at construction: the literal's runtime kind
/// must match the declared kind, and the operator must be legal for that
/// kind (see [`Operator::is_legal_for`]). Once built it is immutable and
/// evaluation is a pure function of the predicate and its input.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    operator: Operator,
    kind: ValueKind,
    literal: Value,
}

impl Predicate {
    /// Create a new predicate, rejecting kind/operator mismatches.
    pub fn new(operator: Operator, kind: ValueKind, literal: Value) -> Result<Self, FilterError> {
        if literal.kind() != kind {
            return Err(FilterError::KindMismatch {
                declared: kind,
                actual: literal.kind(),
            });
        }
        if !operator.is_legal_for(kind) {
            return Err(FilterError::IllegalOperator { operator, kind });
        }
        Ok(Self {
            operator,
            kind,
            literal,
        })
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Apply the operator to `data`.
    ///
    /// Numeric equality is approximate within [`NUMBER_EPSILON`]; string
    /// and datetime equality are exact. Input whose kind disagrees with
    /// the predicate's kind yields `false` rather than an error.
    pub fn evaluate(&self, data: &Value) -> bool {
        match (&self.literal, data) {
            (Value::String(literal), Value::String(data)) => self.evaluate_string(literal, data),
            (Value::Number(literal), Value::Number(data)) => self.evaluate_number(*literal, *data),
            (Value::Datetime(literal), Value::Datetime(data)) => {
                self.evaluate_datetime(literal, data)
            }
            _ => false,
        }
    }

    fn evaluate_string(&self, literal: &str, data: &str) -> bool {
        match self.operator {
            Operator::Equal => data == literal,
            Operator::NotEqual => data != literal,
            Operator::Contain => data.contains(literal),
            _ => false,
        }
    }

    fn evaluate_number(&self, literal: f64, data: f64) -> bool {
        match self.operator {
            Operator::Equal => approximately_equal(literal, data),
            Operator::NotEqual => !approximately_equal(literal, data),
            Operator::LessThan => data < literal,
            Operator::LessThanOrEqual => data < literal || approximately_equal(literal, data),
            Operator::GreaterThan => data > literal,
            Operator::GreaterThanOrEqual => data > literal || approximately_equal(literal, data),
            Operator::Contain => false,
        }
    }

    fn evaluate_datetime(&self, literal: &DateTime<Utc>, data: &DateTime<Utc>) -> bool {
        // Instants compare exactly, at full resolution. No epsilon.
        match self.operator {
            Operator::Equal => data == literal,
            Operator::NotEqual => data != literal,
            Operator::LessThan => data < literal,
            Operator::LessThanOrEqual => data <= literal,
            Operator::GreaterThan => data > literal,
            Operator::GreaterThanOrEqual => data >= literal,
            Operator::Contain => false,
        }
    }
}

/// Check whether two floats are equal within [`NUMBER_EPSILON`].
///
/// Direct `f64` equality is unreliable after arithmetic or text parsing,
/// so all numeric equality in the engine goes through this tolerance.
fn approximately_equal(x1: f64, x2: f64) -> bool {
    (x1 - x2).abs() <= NUMBER_EPSILON
}
