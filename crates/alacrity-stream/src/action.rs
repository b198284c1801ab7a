use alacrity_field::predicate::FieldPredicate;
use std::{any::Any, cmp::Ordering, sync::Arc};

///
/// ActionType
///
/// Declarative tag for one pipeline stage. An optimizer inspects the tag
/// to decide whether it can rewrite the stage into a native query
/// operation; unrecognized stages fall back to [`Action::apply`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActionType {
    Filter,
    Sorted,
}

///
/// Action
///
/// One stage of a stream pipeline. The transformation performed by `apply`
/// must be observably equivalent to what the stage's metadata describes —
/// that equivalence is what makes push-down safe.
///

pub trait Action<T>: Send + Sync {
    fn action_type(&self) -> ActionType;

    fn apply(&self, input: Vec<T>) -> Vec<T>;

    /// Downcast hook for optimizers that recognize a concrete stage.
    fn as_any(&self) -> &dyn Any;
}

///
/// SortedAction
///
/// Stable sort under a captured comparator: equal elements keep their
/// relative input order.
///

#[derive(Clone)]
pub struct SortedAction<T> {
    comparator: Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>,
}

impl<T> SortedAction<T> {
    pub fn new(comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static) -> Self {
        Self {
            comparator: Arc::new(comparator),
        }
    }

    /// The captured comparator, for optimizer inspection (an ORDER BY
    /// rewrite reads this instead of invoking `apply`).
    #[must_use]
    pub fn comparator(&self) -> Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync> {
        Arc::clone(&self.comparator)
    }
}

impl<T: Send + Sync + 'static> Action<T> for SortedAction<T> {
    fn action_type(&self) -> ActionType {
        ActionType::Sorted
    }

    fn apply(&self, mut input: Vec<T>) -> Vec<T> {
        input.sort_by(|a, b| (self.comparator)(a, b));
        input
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

///
/// FilterAction
///
/// Retains the elements matching a captured field predicate. The predicate
/// is exposed so an optimizer can push the comparison down; executing
/// `apply` instead gives identical results by the predicate's dual
/// contract.
///

#[derive(Clone)]
pub struct FilterAction<E, V> {
    predicate: FieldPredicate<E, V>,
}

impl<E, V: PartialOrd> FilterAction<E, V> {
    pub const fn new(predicate: FieldPredicate<E, V>) -> Self {
        Self { predicate }
    }

    #[must_use]
    pub const fn predicate(&self) -> &FieldPredicate<E, V> {
        &self.predicate
    }
}

impl<E, V> Action<E> for FilterAction<E, V>
where
    E: Send + Sync + 'static,
    V: PartialOrd + Send + Sync + 'static,
{
    fn action_type(&self) -> ActionType {
        ActionType::Filter
    }

    fn apply(&self, input: Vec<E>) -> Vec<E> {
        input
            .into_iter()
            .filter(|entity| self.predicate.test(entity))
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

///
/// TESTS
///
