use thiserror::Error as ThisError;

///
/// FieldError
///
/// Illegal-state kind: the entity was not populated for the field being
/// read. A programming-error signal, not a routine condition.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
pub enum FieldError {
    #[error("field `{field}` has no value for this entity")]
    Missing { field: &'static str },
}
