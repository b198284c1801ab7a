use crate::{
    document::{ChildList, Document},
    node::{Column, ForeignKey, keys},
    traits::{DocumentNode, HasEnabled, HasName},
};

///
/// Table
///

#[derive(Clone, Debug, PartialEq)]
pub struct Table<D: Document> {
    doc: D,
}

impl<D: Document> Table<D> {
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    #[must_use]
    pub fn columns(&self) -> ChildList<Column<D>> {
        self.doc.children(keys::COLUMNS, Column::new)
    }

    #[must_use]
    pub fn foreign_keys(&self) -> ChildList<ForeignKey<D>> {
        self.doc.children(keys::FOREIGN_KEYS, ForeignKey::new)
    }
}

impl<D: Document> DocumentNode for Table<D> {
    type Doc = D;

    fn as_document(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> HasName for Table<D> {}
impl<D: Document> HasEnabled for Table<D> {}
