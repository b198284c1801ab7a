use crate::{
    document::{ChildList, Document},
    node::{Dbms, keys},
    traits::{DocumentNode, HasEnabled, HasName},
};

///
/// Project
///
/// Root of the configuration tree.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Project<D: Document> {
    doc: D,
}

impl<D: Document> Project<D> {
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    #[must_use]
    pub fn dbmses(&self) -> ChildList<Dbms<D>> {
        self.doc.children(keys::DBMSES, Dbms::new)
    }

    /// Consume the wrapper and return the underlying document.
    pub fn into_document(self) -> D {
        self.doc
    }
}

impl<D: Document> DocumentNode for Project<D> {
    type Doc = D;

    fn as_document(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> HasName for Project<D> {}
impl<D: Document> HasEnabled for Project<D> {}
