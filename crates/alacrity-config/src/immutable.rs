use crate::{
    document::{ChildList, Document},
    error::DocumentError,
    tree::{DocId, DocTree},
    value::{DocMap, DocValue},
};
use parking_lot::RwLock;
use std::{
    any::{Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

/// Cache key: one materialized list per node, key, and instantiated type.
type CacheKey = (DocId, String, TypeId);

///
/// FrozenTree
///
/// An arena captured from a mutable document's data. The node data is never
/// written after construction; the only interior mutability is the
/// single-assignment child-materialization cache.
///

#[derive(Debug)]
pub struct FrozenTree {
    tree: DocTree,
    cache: RwLock<HashMap<CacheKey, Arc<dyn Any + Send + Sync>>>,
}

///
/// ImmutableDocument
///
/// Read-only document handle, safely shared across threads for the lifetime
/// of a built application. Child lists are materialized once per key and
/// handed out by identity afterwards.
///

#[derive(Clone, Debug)]
pub struct ImmutableDocument {
    tree: Arc<FrozenTree>,
    id: DocId,
}

impl ImmutableDocument {
    /// Freeze the current data of any document. Mutations made to the
    /// source afterwards are not reflected.
    pub fn from<D: Document>(document: &D) -> Result<Self, DocumentError> {
        let tree = DocTree::from_data(&document.data())?;

        Ok(Self {
            tree: Arc::new(FrozenTree {
                tree,
                cache: RwLock::new(HashMap::new()),
            }),
            id: DocTree::ROOT,
        })
    }

    fn handle(&self, id: DocId) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            id,
        }
    }
}

impl PartialEq for ImmutableDocument {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl Eq for ImmutableDocument {}

impl Document for ImmutableDocument {
    fn get(&self, key: &str) -> Option<DocValue> {
        self.tree.tree.get(self.id, key)
    }

    fn put(&self, key: &str, _value: DocValue) -> Result<(), DocumentError> {
        Err(DocumentError::immutable(key))
    }

    fn parent(&self) -> Option<Self> {
        self.tree.tree.parent(self.id).map(|id| self.handle(id))
    }

    fn data(&self) -> DocMap {
        self.tree.tree.export(self.id)
    }

    fn child_keys(&self) -> Vec<String> {
        self.tree.tree.child_keys(self.id)
    }

    fn children<T, F>(&self, key: &str, instantiate: F) -> ChildList<T>
    where
        T: Send + Sync + 'static,
        F: Fn(Self) -> T,
    {
        let cache_key: CacheKey = (self.id, key.to_string(), TypeId::of::<T>());

        if let Some(hit) = self.tree.cache.read().get(&cache_key) {
            return downcast_list(hit);
        }

        // Materialize outside the write lock; concurrent first-callers may
        // build redundant lists, but only the first insert wins and every
        // caller observes the winner.
        let built: ChildList<T> = Arc::new(
            self.tree
                .tree
                .children(self.id, key)
                .into_iter()
                .map(|id| instantiate(self.handle(id)))
                .collect(),
        );

        let erased: Arc<dyn Any + Send + Sync> = built;
        let mut cache = self.tree.cache.write();
        let stored = cache.entry(cache_key).or_insert(erased);

        downcast_list(stored)
    }
}

fn downcast_list<T: Send + Sync + 'static>(stored: &Arc<dyn Any + Send + Sync>) -> ChildList<T> {
    Arc::clone(stored)
        .downcast::<Vec<T>>()
        .expect("child cache entries are keyed by TypeId")
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseDocument;
    use std::thread;

    #[derive(Debug)]
    struct ColumnStub {
        doc: ImmutableDocument,
    }

    impl ColumnStub {
        fn new(doc: ImmutableDocument) -> Self {
            Self { doc }
        }
    }

    fn frozen_with_columns() -> ImmutableDocument {
        let doc = BaseDocument::new();
        doc.put("name", DocValue::from("orders")).unwrap();

        let a = doc.add_child("columns").unwrap();
        a.put("name", DocValue::from("id")).unwrap();
        let b = doc.add_child("columns").unwrap();
        b.put("name", DocValue::from("total")).unwrap();

        ImmutableDocument::from(&doc).unwrap()
    }

    #[test]
    fn put_always_fails_with_immutable_kind() {
        let frozen = frozen_with_columns();

        for value in [DocValue::from(1), DocValue::from("x"), DocValue::from(true)] {
            assert_eq!(
                frozen.put("anything", value),
                Err(DocumentError::Immutable {
                    key: "anything".to_string()
                })
            );
        }
    }

    #[test]
    fn freeze_does_not_track_source_mutation() {
        let doc = BaseDocument::new();
        doc.put("name", DocValue::from("before")).unwrap();

        let frozen = ImmutableDocument::from(&doc).unwrap();
        doc.put("name", DocValue::from("after")).unwrap();

        assert_eq!(frozen.get("name"), Some(DocValue::Text("before".to_string())));
    }

    #[test]
    fn children_are_cached_by_identity() {
        let frozen = frozen_with_columns();

        let first = frozen.children("columns", ColumnStub::new);
        let second = frozen.children("columns", ColumnStub::new);

        assert_eq!(first.len(), 2);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn second_call_does_not_reinvoke_instantiator() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let frozen = frozen_with_columns();
        let calls = Arc::new(AtomicUsize::new(0));

        let counting = {
            let calls = Arc::clone(&calls);
            move |doc: ImmutableDocument| {
                calls.fetch_add(1, Ordering::SeqCst);
                ColumnStub::new(doc)
            }
        };

        frozen.children("columns", &counting);
        frozen.children("columns", &counting);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_first_calls_observe_one_list() {
        let frozen = frozen_with_columns();

        let lists: Vec<ChildList<ColumnStub>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let frozen = frozen.clone();
                    scope.spawn(move || frozen.children("columns", ColumnStub::new))
                })
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for list in &lists[1..] {
            assert!(Arc::ptr_eq(&lists[0], list));
        }
    }

    #[test]
    fn round_trip_scenario() {
        let frozen = frozen_with_columns();

        let columns = frozen.children("columns", ColumnStub::new);
        assert_eq!(columns.len(), 2);
        assert_eq!(
            columns[0].doc.get("name"),
            Some(DocValue::Text("id".to_string()))
        );
        assert_eq!(
            columns[1].doc.get("name"),
            Some(DocValue::Text("total".to_string()))
        );
        assert_eq!(columns[0].doc.parent(), Some(frozen.clone()));
        assert_eq!(columns[1].doc.parent(), Some(frozen));
    }
}
