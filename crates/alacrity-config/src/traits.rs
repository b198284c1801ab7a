use crate::{document::Document, error::DocumentError, node::keys, value::DocValue};

///
/// DocumentNode
///
/// Implemented by the typed wrappers (project, dbms, schema, table, column,
/// foreign key) to expose the underlying document handle.
///

pub trait DocumentNode {
    type Doc: Document;

    fn as_document(&self) -> &Self::Doc;
}

///
/// HasName
///
/// Capability: the node carries a `name` attribute. Replaces runtime type
/// inspection chains with an explicit capability set.
///

pub trait HasName: DocumentNode {
    fn name(&self) -> Result<String, DocumentError> {
        match self.as_document().get(keys::NAME) {
            Some(DocValue::Text(name)) => Ok(name),
            _ => Err(DocumentError::missing_attribute(keys::NAME)),
        }
    }

    fn set_name(&self, name: &str) -> Result<(), DocumentError> {
        if name.is_empty() {
            return Err(DocumentError::EmptyName);
        }
        self.as_document().put(keys::NAME, name.into())
    }
}

///
/// HasEnabled
///
/// Capability: the node can be switched off. Absent means enabled.
///

pub trait HasEnabled: DocumentNode {
    fn is_enabled(&self) -> bool {
        match self.as_document().get(keys::ENABLED) {
            Some(DocValue::Bool(enabled)) => enabled,
            _ => true,
        }
    }

    fn set_enabled(&self, enabled: bool) -> Result<(), DocumentError> {
        self.as_document().put(keys::ENABLED, enabled.into())
    }
}

///
/// TESTS
///
