//! Binary combinator tree over filterable leaves.

use crate::filter::group::Filterable;
use crate::filter::model::Condition;

/// A binary expression tree of filterables.
///
/// A tree is either a single leaf or an AND/OR combination of exactly
/// two subtrees; the enum encoding makes unbalanced or condition-less
/// branches unrepresentable. Trees are built bottom-up and never
/// mutated after construction.
///
/// `((g1 OR g2) AND g3)` is built as:
///
/// ```ignore
/// let tree = FilterTree::branch(
///     Condition::And,
///     FilterTree::branch(Condition::Or, FilterTree::leaf(g1), FilterTree::leaf(g2)),
///     FilterTree::leaf(g3),
/// );
/// let matched = tree.evaluate();
/// ```
pub enum FilterTree {
    Leaf(Box<dyn Filterable + Send + Sync>),
    Branch {
        condition: Condition,
        left: Box<FilterTree>,
        right: Box<FilterTree>,
    },
}

impl std::fmt::Debug for FilterTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterTree::Leaf(_) => f.debug_tuple("Leaf").finish_non_exhaustive(),
            FilterTree::Branch {
                condition,
                left,
                right,
            } => f
                .debug_struct("Branch")
                .field("condition", condition)
                .field("left", left)
                .field("right", right)
                .finish(),
        }
    }
}

impl FilterTree {
    pub fn leaf(filterable: impl Filterable + Send + Sync + 'static) -> Self {
        FilterTree::Leaf(Box::new(filterable))
    }

    pub fn branch(condition: Condition, left: FilterTree, right: FilterTree) -> Self {
        FilterTree::Branch {
            condition,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Evaluate the tree against the current record.
    ///
    /// Branches short-circuit: an AND skips its right subtree when the
    /// left is false, an OR when the left is true. Leaves may hold
    /// field accessors with observable effects, so the skip is part of
    /// the contract, not just an optimization.
    pub fn evaluate(&self) -> bool {
        match self {
            FilterTree::Leaf(filterable) => filterable.matches(),
            FilterTree::Branch {
                condition: Condition::And,
                left,
                right,
            } => left.evaluate() && right.evaluate(),
            FilterTree::Branch {
                condition: Condition::Or,
                left,
                right,
            } => left.evaluate() || right.evaluate(),
        }
    }
}
