use crate::{
    document::{ChildList, Document},
    error::DocumentError,
    node::{Schema, keys},
    traits::{DocumentNode, HasEnabled, HasName},
    value::DocValue,
};

///
/// Dbms
///
/// One database management system instance: connection coordinates plus its
/// schemas.
///

#[derive(Clone, Debug, PartialEq)]
pub struct Dbms<D: Document> {
    doc: D,
}

impl<D: Document> Dbms<D> {
    pub fn new(doc: D) -> Self {
        Self { doc }
    }

    #[must_use]
    pub fn schemas(&self) -> ChildList<Schema<D>> {
        self.doc.children(keys::SCHEMAS, Schema::new)
    }

    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.text_attr(keys::USERNAME)
    }

    pub fn set_username(&self, username: &str) -> Result<(), DocumentError> {
        self.doc.put(keys::USERNAME, username.into())
    }

    #[must_use]
    pub fn ip_address(&self) -> Option<String> {
        self.text_attr(keys::IP_ADDRESS)
    }

    pub fn set_ip_address(&self, ip_address: &str) -> Result<(), DocumentError> {
        self.doc.put(keys::IP_ADDRESS, ip_address.into())
    }

    #[must_use]
    pub fn port(&self) -> Option<i64> {
        match self.doc.get(keys::PORT) {
            Some(DocValue::Int(port)) => Some(port),
            _ => None,
        }
    }

    pub fn set_port(&self, port: u16) -> Result<(), DocumentError> {
        self.doc.put(keys::PORT, i64::from(port).into())
    }

    #[must_use]
    pub fn connection_url(&self) -> Option<String> {
        self.text_attr(keys::CONNECTION_URL)
    }

    pub fn set_connection_url(&self, url: &str) -> Result<(), DocumentError> {
        self.doc.put(keys::CONNECTION_URL, url.into())
    }

    fn text_attr(&self, key: &str) -> Option<String> {
        match self.doc.get(key) {
            Some(DocValue::Text(value)) => Some(value),
            _ => None,
        }
    }
}

impl<D: Document> DocumentNode for Dbms<D> {
    type Doc = D;

    fn as_document(&self) -> &D {
        &self.doc
    }
}

impl<D: Document> HasName for Dbms<D> {}
impl<D: Document> HasEnabled for Dbms<D> {}
