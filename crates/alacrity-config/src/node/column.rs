use crate::{
    document::Document,
    error::DocumentError,
    node::keys,
    traits::{DocumentNode, HasEnabled, HasName},
    value::DocValue,
};

///
/// Column
///

#[derive(Clone, Debug, PartialEq)]
pub struct Column<D: Document> {
    doc: D,
}

impl<D: Document> Column<D> {
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    /// Absent means not nullable.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self.doc.get(keys::NULLABLE) {
            Some(DocValue::Bool(nullable)) => nullable,
            _ => false,
        }
    }

    pub fn set_nullable(&self, nullable: bool) -> Result<(), DocumentError> {
        self.doc.put(keys::NULLABLE, nullable.into())
    }
}

impl<D: Document> DocumentNode for Column<D> {
    type Doc = D;

    fn as_document(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> HasName for Column<D> {}
impl<D: Document> HasEnabled for Column<D> {}
