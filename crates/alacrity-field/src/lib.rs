//! Typed fields and predicates for generated entity code: a `Field` binds
//! a column name to a pure accessor, and a `FieldPredicate` captures one
//! comparison both as declarative metadata (for push-down) and as an
//! executable test (for in-memory filtering).

pub mod error;
pub mod field;
pub mod predicate;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        error::FieldError,
        field::{Field, HasValue},
        predicate::{Cmp, FieldPredicate, Operand},
    };
}
