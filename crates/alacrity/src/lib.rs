//! Alacrity — a schema-first ORM toolkit.
//!
//! ## Crate layout
//! - `config`: the configuration document tree (mutable build-time form,
//!   frozen read-time form, typed nodes, JSON transcoder).
//! - `field`: typed field accessors and comparison predicates with a dual
//!   declarative/executable contract.
//! - `stream`: inspectable pipeline stages an optimizer may rewrite.
//! - `builder`: application bootstrap — load metadata, apply overrides,
//!   validate, freeze, publish.

pub use alacrity_config as config;
pub use alacrity_field as field;
pub use alacrity_stream as stream;

pub mod builder;

use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] alacrity_config::Error),
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, VERSION,
        builder::{Application, ApplicationBuilder},
    };
    pub use alacrity_config::prelude::*;
    pub use alacrity_field::prelude::*;
    pub use alacrity_stream::prelude::*;
}
