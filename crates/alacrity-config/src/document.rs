use crate::{
    error::DocumentError,
    value::{DocMap, DocValue},
};
use std::sync::Arc;

///
/// ChildList
///
/// Materialized, ordered child documents for one key. Shared so the
/// immutable variant can hand out the identical list on every call.
///

pub type ChildList<T> = Arc<Vec<T>>;

///
/// Document
///
/// One node of the configuration tree (a dbms, schema, table, column or
/// foreign key). Handles are cheap to clone; equality is node identity
/// within one tree.
///

pub trait Document: Clone + PartialEq + Send + Sync + Sized + 'static {
    /// Raw value for `key`, or `None` when absent. Missing keys are not an
    /// error.
    fn get(&self, key: &str) -> Option<DocValue>;

    /// Store or overwrite `key`. Immutable documents fail with
    /// [`DocumentError::Immutable`]; this is the write boundary, not a
    /// convention.
    fn put(&self, key: &str, value: DocValue) -> Result<(), DocumentError>;

    /// The document this one hangs off, if any. Back-references carry no
    /// ownership.
    fn parent(&self) -> Option<Self>;

    /// Snapshot of this subtree as a mapping literal.
    fn data(&self) -> DocMap;

    /// Keys under which this document carries nested documents.
    fn child_keys(&self) -> Vec<String>;

    /// Typed child documents under `key`, in stored order. Each child's
    /// parent back-reference leads here. A mutable document recomputes the
    /// list on every call; an immutable one materializes it once per key
    /// and instantiated type.
    fn children<T, F>(&self, key: &str, instantiate: F) -> ChildList<T>
    where
        T: Send + Sync + 'static,
        F: Fn(Self) -> T;

    /// Untyped variant of [`Document::children`], used for traversal.
    fn child_documents(&self, key: &str) -> ChildList<Self> {
        self.children(key, |doc| doc)
    }
}
