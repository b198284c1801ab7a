use crate::{
    document::{ChildList, Document},
    error::DocumentError,
    tree::{DocId, DocTree},
    value::{DocMap, DocValue},
};
use parking_lot::RwLock;
use std::sync::Arc;

///
/// BaseDocument
///
/// Mutable document handle over a shared arena. Built single-threaded
/// during schema introspection or programmatic configuration; callers
/// serialize writes. Child lists are recomputed on every call and reflect
/// live mutation.
///

#[derive(Clone, Debug)]
pub struct BaseDocument {
    tree: Arc<RwLock<DocTree>>,
    id: DocId,
}

impl BaseDocument {
    /// A fresh single-node document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: Arc::new(RwLock::new(DocTree::new())),
            id: DocTree::ROOT,
        }
    }

    /// A document tree built from a mapping literal.
    pub fn from_data(data: &DocMap) -> Result<Self, DocumentError> {
        Ok(Self {
            tree: Arc::new(RwLock::new(DocTree::from_data(data)?)),
            id: DocTree::ROOT,
        })
    }

    /// Append an empty child document under `key` and return its handle.
    pub fn add_child(&self, key: &str) -> Result<Self, DocumentError> {
        let id = self.tree.write().add_child(self.id, key)?;
        Ok(self.handle(id))
    }

    fn handle(&self, id: DocId) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            id,
        }
    }
}

impl Default for BaseDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for BaseDocument {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl Eq for BaseDocument {}

impl Document for BaseDocument {
    fn get(&self, key: &str) -> Option<DocValue> {
        self.tree.read().get(self.id, key)
    }

    fn put(&self, key: &str, value: DocValue) -> Result<(), DocumentError> {
        self.tree.write().put(self.id, key, value)
    }

    fn parent(&self) -> Option<Self> {
        self.tree.read().parent(self.id).map(|id| self.handle(id))
    }

    fn data(&self) -> DocMap {
        self.tree.read().export(self.id)
    }

    fn child_keys(&self) -> Vec<String> {
        self.tree.read().child_keys(self.id)
    }

    fn children<T, F>(&self, key: &str, instantiate: F) -> ChildList<T>
    where
        T: Send + Sync + 'static,
        F: Fn(Self) -> T,
    {
        let ids = self.tree.read().children(self.id, key);
        Arc::new(ids.into_iter().map(|id| instantiate(self.handle(id))).collect())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_reflect_live_mutation() {
        let doc = BaseDocument::new();
        doc.add_child("columns").unwrap();

        assert_eq!(doc.child_documents("columns").len(), 1);

        doc.add_child("columns").unwrap();
        assert_eq!(doc.child_documents("columns").len(), 2);
    }

    #[test]
    fn child_parent_links_back() {
        let doc = BaseDocument::new();
        let child = doc.add_child("tables").unwrap();

        assert_eq!(child.parent(), Some(doc));
    }

    #[test]
    fn put_overwrites() {
        let doc = BaseDocument::new();
        doc.put("name", DocValue::from("a")).unwrap();
        doc.put("name", DocValue::from("b")).unwrap();

        assert_eq!(doc.get("name"), Some(DocValue::Text("b".to_string())));
    }

    #[test]
    fn missing_key_is_not_an_error() {
        let doc = BaseDocument::new();
        assert_eq!(doc.get("nope"), None);
    }

    #[test]
    fn mutation_through_child_is_visible_from_parent_data() {
        let doc = BaseDocument::new();
        let child = doc.add_child("columns").unwrap();
        child.put("name", DocValue::from("id")).unwrap();

        let data = doc.data();
        match data.get("columns") {
            Some(DocValue::List(items)) => {
                assert_eq!(items[0].get("name"), Some(&DocValue::Text("id".to_string())));
            }
            other => panic!("expected List, got {other:?}"),
        }
    }
}
