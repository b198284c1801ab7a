use crate::{
    document::{ChildList, Document},
    node::{Table, keys},
    traits::{DocumentNode, HasEnabled, HasName},
};

///
/// Schema
///

#[derive(Clone, Debug, PartialEq)]
pub struct Schema<D: Document> {
    doc: D,
}

impl<D: Document> Schema<D> {
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    #[must_use]
    pub fn tables(&self) -> ChildList<Table<D>> {
        self.doc.children(keys::TABLES, Table::new)
    }
}

impl<D: Document> DocumentNode for Schema<D> {
    type Doc = D;

    fn as_document(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> HasName for Schema<D> {}
impl<D: Document> HasEnabled for Schema<D> {}
