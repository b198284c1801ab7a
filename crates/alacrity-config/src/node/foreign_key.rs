use crate::{
    document::Document,
    error::DocumentError,
    node::keys,
    traits::{DocumentNode, HasEnabled, HasName},
    value::DocValue,
};

///
/// ForeignKey
///
/// A reference from one table's column to another table's column.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ForeignKey<D: Document> {
    doc: D,
}

impl<D: Document> ForeignKey<D> {
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    #[must_use]
    pub fn foreign_table(&self) -> Option<String> {
        self.text_attr(keys::FOREIGN_TABLE)
    }

    pub fn set_foreign_table(&self, table: &str) -> Result<(), DocumentError> {
        self.doc.put(keys::FOREIGN_TABLE, table.into())
    }

    #[must_use]
    pub fn foreign_column(&self) -> Option<String> {
        self.text_attr(keys::FOREIGN_COLUMN)
    }

    pub fn set_foreign_column(&self, column: &str) -> Result<(), DocumentError> {
        self.doc.put(keys::FOREIGN_COLUMN, column.into())
    }

    fn text_attr(&self, key: &str) -> Option<String> {
        match self.doc.get(key) {
            Some(DocValue::Text(value)) => Some(value),
            _ => None,
        }
    }
}

impl<D: Document> DocumentNode for ForeignKey<D> {
    type Doc = D;

    fn as_document(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> HasName for ForeignKey<D> {}
impl<D: Document> HasEnabled for ForeignKey<D> {}
