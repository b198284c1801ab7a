use crate::{
    error::FieldError,
    predicate::{Cmp, FieldPredicate, Operand},
};
use std::{cmp::Ordering, fmt};

///
/// HasValue
///
/// Capability: extract one typed property from an entity instance. The
/// extraction must be pure and total over valid entities; `None` means the
/// entity carries no value (a nullable column, or a partial projection).
///

pub trait HasValue<E> {
    type Value;

    fn name(&self) -> &'static str;

    fn value_of(&self, entity: &E) -> Option<Self::Value>;

    /// The extracted value, or the illegal-state kind naming the field.
    fn get(&self, entity: &E) -> Result<Self::Value, FieldError> {
        self.value_of(entity).ok_or(FieldError::Missing {
            field: self.name(),
        })
    }
}

///
/// Field
///
/// A typed, named property of a generated entity type `E` whose column
/// value has type `V`. Created once, as a `const`, by generated code;
/// copied freely afterwards.
///

pub struct Field<E, V> {
    name: &'static str,
    accessor: fn(&E) -> Option<V>,
}

impl<E, V> Field<E, V> {
    #[must_use]
    pub const fn new(name: &'static str, accessor: fn(&E) -> Option<V>) -> Self {
        Self { name, accessor }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E, V: PartialOrd> Field<E, V> {
    #[must_use]
    pub fn equal(self, value: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Eq, Operand::One(value))
    }

    #[must_use]
    pub fn not_equal(self, value: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Ne, Operand::One(value))
    }

    #[must_use]
    pub fn less_than(self, value: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Lt, Operand::One(value))
    }

    #[must_use]
    pub fn less_or_equal(self, value: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Lte, Operand::One(value))
    }

    #[must_use]
    pub fn greater_than(self, value: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Gt, Operand::One(value))
    }

    #[must_use]
    pub fn greater_or_equal(self, value: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Gte, Operand::One(value))
    }

    /// Inclusive at both ends.
    #[must_use]
    pub fn between(self, lo: V, hi: V) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::Between, Operand::Two(lo, hi))
    }

    /// Never fails, even where `get` would.
    #[must_use]
    pub fn is_null(self) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::IsNull, Operand::None)
    }

    /// Never fails, even where `get` would.
    #[must_use]
    pub fn is_not_null(self) -> FieldPredicate<E, V> {
        FieldPredicate::new(self, Cmp::IsNotNull, Operand::None)
    }

    /// Entity ordering by this field's value under `V`'s natural order.
    /// Absent values sort first; incomparable values (IEEE NaN) compare
    /// equal.
    pub fn comparator(self) -> impl Fn(&E, &E) -> Ordering {
        move |a, b| {
            match (self.value_of(a), self.value_of(b)) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(va), Some(vb)) => va.partial_cmp(&vb).unwrap_or(Ordering::Equal),
            }
        }
    }
}

impl<E, V> HasValue<E> for Field<E, V> {
    type Value = V;

    fn name(&self) -> &'static str {
        self.name
    }

    fn value_of(&self, entity: &E) -> Option<V> {
        (self.accessor)(entity)
    }
}

impl<E, V> Clone for Field<E, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, V> Copy for Field<E, V> {}

impl<E, V> fmt::Debug for Field<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

///
/// TESTS
///
