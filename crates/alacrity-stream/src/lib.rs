//! Inspectable stream pipeline stages: each stage carries declarative
//! metadata (tag, comparator, predicate) alongside the transformation it
//! performs, so an optimizer can rewrite recognized stages into native
//! query operations and fall back to direct execution for the rest.

pub mod action;
pub mod pipeline;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        action::{Action, ActionType, FilterAction, SortedAction},
        pipeline::Pipeline,
    };
}
