//! Error types for predicate construction.

use crate::filter::model::{Operator, ValueKind};
use thiserror::Error;

/// Errors raised when building predicates and predicate groups.
///
/// These are construction-time validation failures. Evaluation itself
/// never errors; data problems at evaluation time resolve to a `false`
/// match instead (fail-closed).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("literal has kind {actual}, but the predicate declares kind {declared}")]
    KindMismatch {
        declared: ValueKind,
        actual: ValueKind,
    },

    #[error("operator {operator} is not legal for kind {kind}")]
    IllegalOperator { operator: Operator, kind: ValueKind },

    #[error("predicate group must hold at least one predicate")]
    EmptyGroup,

    #[error("predicate group mixes kind {found} with kind {expected}")]
    MixedGroupKinds {
        expected: ValueKind,
        found: ValueKind,
    },
}
