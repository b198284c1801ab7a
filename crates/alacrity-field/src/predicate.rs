use crate::field::{Field, HasValue};
use serde::Serialize;

///
/// Cmp
///
/// Declarative operator tag. An optimizer that recognizes the tag may push
/// the comparison into a native query; re-evaluating the tag against the
/// captured operands must give the same answer as [`FieldPredicate::test`].
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Cmp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    Between,
    IsNull,
    IsNotNull,
}

///
/// Operand
///
/// Captured comparison literal(s): none for the null tests, one for the
/// simple comparisons, a pair for ranges.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Operand<V> {
    None,
    One(V),
    Two(V, V),
}

impl<V> Operand<V> {
    #[must_use]
    pub const fn first(&self) -> Option<&V> {
        match self {
            Self::None => None,
            Self::One(a) | Self::Two(a, _) => Some(a),
        }
    }

    #[must_use]
    pub const fn second(&self) -> Option<&V> {
        match self {
            Self::Two(_, b) => Some(b),
            _ => None,
        }
    }
}

///
/// FieldPredicate
///
/// A single comparison against one field with captured operand(s). Both a
/// value (operator tag + operands, for push-down) and an executable test
/// (for in-memory filtering); the two agree because evaluation derives
/// from the metadata.
///

pub struct FieldPredicate<E, V> {
    field: Field<E, V>,
    cmp: Cmp,
    operand: Operand<V>,
}

impl<E, V: PartialOrd> FieldPredicate<E, V> {
    pub(crate) fn new(field: Field<E, V>, cmp: Cmp, operand: Operand<V>) -> Self {
        debug_assert!(
            matches!(
                (cmp, &operand),
                (Cmp::IsNull | Cmp::IsNotNull, Operand::None)
                    | (Cmp::Between, Operand::Two(_, _))
                    | (
                        Cmp::Eq | Cmp::Ne | Cmp::Lt | Cmp::Lte | Cmp::Gt | Cmp::Gte,
                        Operand::One(_)
                    )
            ),
            "operator/operand arity mismatch"
        );

        Self {
            field,
            cmp,
            operand,
        }
    }

    #[must_use]
    pub const fn field(&self) -> Field<E, V> {
        self.field
    }

    #[must_use]
    pub const fn cmp(&self) -> Cmp {
        self.cmp
    }

    #[must_use]
    pub const fn operand(&self) -> &Operand<V> {
        &self.operand
    }

    /// Evaluate against one entity. Pure, synchronous, side-effect free.
    /// The null tests inspect absence only; a value comparison against an
    /// absent value is `false`.
    #[must_use]
    pub fn test(&self, entity: &E) -> bool {
        let value = self.field.value_of(entity);

        match self.cmp {
            Cmp::IsNull => value.is_none(),
            Cmp::IsNotNull => value.is_some(),
            cmp => value.is_some_and(|v| Self::compare(cmp, &v, &self.operand)),
        }
    }

    fn compare(cmp: Cmp, value: &V, operand: &Operand<V>) -> bool {
        match (cmp, operand) {
            (Cmp::Eq, Operand::One(a)) => value == a,
            (Cmp::Ne, Operand::One(a)) => value != a,
            (Cmp::Lt, Operand::One(a)) => value < a,
            (Cmp::Lte, Operand::One(a)) => value <= a,
            (Cmp::Gt, Operand::One(a)) => value > a,
            (Cmp::Gte, Operand::One(a)) => value >= a,
            (Cmp::Between, Operand::Two(lo, hi)) => lo <= value && value <= hi,
            // arity is checked at construction
            _ => false,
        }
    }
}

impl<E, V: Clone> Clone for FieldPredicate<E, V> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            cmp: self.cmp,
            operand: self.operand.clone(),
        }
    }
}

impl<E, V: std::fmt::Debug> std::fmt::Debug for FieldPredicate<E, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldPredicate")
            .field("field", &self.field.name())
            .field("cmp", &self.cmp)
            .field("operand", &self.operand)
            .finish()
    }
}

///
/// TESTS
///


///
/// PROPERTY TESTS
///
