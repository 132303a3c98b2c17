//! Predicate groups: several same-kind predicates applied to one field.

use crate::filter::error::FilterError;
use crate::filter::model::{Condition, Value};
use crate::filter::predicate::Predicate;

/// Anything that can produce a boolean match verdict for the current
/// record. Filter tree leaves hold any implementer.
pub trait Filterable {
    fn matches(&self) -> bool;
}

/// A closure bound to a record source that fetches one field's value
/// from the currently loaded record. `None` means the field is absent
/// or could not be read as the requested kind.
pub type FieldAccessor = Box<dyn Fn() -> Option<Value> + Send + Sync>;

/// An ordered set of predicates evaluated against one field value,
/// combined with AND or OR.
///
/// The field value is fetched lazily, at most once per evaluation. A
/// missing field is a `false` match, not an error (fail-closed). All
/// predicates must share one kind; groups are rejected at construction
/// if empty or mixed-kind.
pub struct PredicateGroup {
    accessor: FieldAccessor,
    predicates: Vec<Predicate>,
    condition: Condition,
}

impl std::fmt::Debug for PredicateGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateGroup")
            .field("predicates", &self.predicates)
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

impl PredicateGroup {
    pub fn new(
        accessor: FieldAccessor,
        predicates: Vec<Predicate>,
        condition: Condition,
    ) -> Result<Self, FilterError> {
        let Some(first) = predicates.first() else {
            return Err(FilterError::EmptyGroup);
        };

        let expected = first.kind();
        for predicate in &predicates {
            if predicate.kind() != expected {
                return Err(FilterError::MixedGroupKinds {
                    expected,
                    found: predicate.kind(),
                });
            }
        }

        Ok(Self {
            accessor,
            predicates,
            condition,
        })
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }
}

impl Filterable for PredicateGroup {
    fn matches(&self) -> bool {
        let value = match (self.accessor)() {
            Some(value) => value,
            None => return false,
        };

        match self.condition {
            // Short-circuits on the first true / first false predicate.
            Condition::Or => self.predicates.iter().any(|p| p.evaluate(&value)),
            Condition::And => self.predicates.iter().all(|p| p.evaluate(&value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::model::{Operator, ValueKind};

    fn number_predicate(operator: Operator, literal: f64) -> Predicate {
        Predicate::new(operator, ValueKind::Number, Value::number(literal)).unwrap()
    }

    fn number_accessor(value: f64) -> FieldAccessor {
        Box::new(move || Some(Value::number(value)))
    }

    #[test]
    fn test_and_requires_every_predicate() {
        let group = PredicateGroup::new(
            number_accessor(15.0),
            vec![
                number_predicate(Operator::GreaterThan, 10.0),
                number_predicate(Operator::LessThanOrEqual, 20.0),
            ],
            Condition::And,
        )
        .unwrap();
        assert!(group.matches());

        let group = PredicateGroup::new(
            number_accessor(20.0),
            vec![
                number_predicate(Operator::LessThan, 20.0),
                number_predicate(Operator::GreaterThan, 30.0),
            ],
            Condition::And,
        )
        .unwrap();
        assert!(!group.matches());
    }

    #[test]
    fn test_or_needs_a_single_match() {
        let group = PredicateGroup::new(
            number_accessor(3158.0),
            vec![
                number_predicate(Operator::Equal, 9999.0),
                number_predicate(Operator::GreaterThan, 10000.0),
                number_predicate(Operator::Equal, 3158.0),
                number_predicate(Operator::LessThan, 3158.0),
            ],
            Condition::Or,
        )
        .unwrap();
        assert!(group.matches());

        let group = PredicateGroup::new(
            number_accessor(15.0),
            vec![
                number_predicate(Operator::GreaterThan, 25.0),
                number_predicate(Operator::LessThan, 10.0),
            ],
            Condition::Or,
        )
        .unwrap();
        assert!(!group.matches());
    }

    #[test]
    fn test_one_true_one_false() {
        let predicates = || {
            vec![
                number_predicate(Operator::GreaterThan, 10.0),
                number_predicate(Operator::GreaterThan, 20.0),
            ]
        };

        let any = PredicateGroup::new(number_accessor(15.0), predicates(), Condition::Or).unwrap();
        assert!(any.matches());

        let all = PredicateGroup::new(number_accessor(15.0), predicates(), Condition::And).unwrap();
        assert!(!all.matches());
    }

    #[test]
    fn test_string_group() {
        let group = PredicateGroup::new(
            Box::new(|| Some(Value::string("banana"))),
            vec![
                Predicate::new(Operator::Contain, ValueKind::String, Value::string("anana"))
                    .unwrap(),
            ],
            Condition::And,
        )
        .unwrap();
        assert!(group.matches());
    }

    #[test]
    fn test_missing_field_fails_closed() {
        let group = PredicateGroup::new(
            Box::new(|| None),
            vec![number_predicate(Operator::Equal, 1.0)],
            Condition::Or,
        )
        .unwrap();
        assert!(!group.matches());
    }

    #[test]
    fn test_empty_group_rejected() {
        let err =
            PredicateGroup::new(number_accessor(1.0), Vec::new(), Condition::And).unwrap_err();
        assert_eq!(err, FilterError::EmptyGroup);
    }

    #[test]
    fn test_mixed_kind_group_rejected() {
        let err = PredicateGroup::new(
            number_accessor(1.0),
            vec![
                number_predicate(Operator::Equal, 1.0),
                Predicate::new(Operator::Equal, ValueKind::String, Value::string("1")).unwrap(),
            ],
            Condition::And,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FilterError::MixedGroupKinds {
                expected: ValueKind::Number,
                found: ValueKind::String,
            }
        );
    }

    #[test]
    fn test_accessor_called_at_most_once_per_evaluation() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let group = PredicateGroup::new(
            Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                Some(Value::number(5.0))
            }),
            vec![
                number_predicate(Operator::GreaterThan, 1.0),
                number_predicate(Operator::LessThan, 10.0),
            ],
            Condition::And,
        )
        .unwrap();

        assert!(group.matches());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
