//! Configuration document model for Alacrity: the arena-backed mutable
//! tree built during schema introspection, the frozen immutable view read
//! concurrently at query time, the typed dbms/schema/table/column nodes,
//! and the JSON transcoder that persists the whole thing.

pub mod base;
pub mod document;
pub mod error;
pub mod immutable;
pub mod node;
pub mod transcode;
pub mod traits;
pub mod tree;
pub mod util;
pub mod validate;
pub mod value;

use crate::{error::DocumentError, transcode::TranscodeError, validate::ErrorTree};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        base::BaseDocument,
        document::{ChildList, Document},
        error::DocumentError,
        immutable::ImmutableDocument,
        node::{Column, Dbms, ForeignKey, Project, Schema, Table, keys},
        traits::{DocumentNode, HasEnabled, HasName},
        value::{DocMap, DocValue},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}
