//! Typed predicate engine for record filtering.
//!
//! This module provides:
//! - The closed value model (string / number / datetime) and operator set
//! - Single typed comparisons (`Predicate`)
//! - AND/OR groups of predicates over one field (`PredicateGroup`)
//! - Binary combinator trees with short-circuit evaluation (`FilterTree`)

pub mod error;
pub mod group;
pub mod model;
pub mod predicate;
pub mod tree;

pub use error::FilterError;
pub use group::{FieldAccessor, Filterable, PredicateGroup};
pub use model::{Condition, Operator, Value, ValueKind, NUMBER_EPSILON};
pub use predicate::Predicate;
pub use tree::FilterTree;
