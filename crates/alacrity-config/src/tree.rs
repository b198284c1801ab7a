use crate::{
    error::DocumentError,
    value::{DocMap, DocValue},
};
use derive_more::Display;

///
/// DocId
///
/// Index of a document node inside its arena. Parent links are plain ids,
/// so the tree carries no ownership cycles.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[display("#{_0}")]
pub struct DocId(u32);

impl DocId {
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

///
/// ChildSlot
///
/// How nested documents hang off a node under one key: a single nested
/// mapping, or an ordered list of them.
///

#[derive(Clone, Debug)]
pub(crate) enum ChildSlot {
    Single(DocId),
    List(Vec<DocId>),
}

impl ChildSlot {
    fn ids(&self) -> Vec<DocId> {
        match self {
            Self::Single(id) => vec![*id],
            Self::List(ids) => ids.clone(),
        }
    }
}

///
/// Node
///

#[derive(Clone, Debug, Default)]
struct Node {
    parent: Option<DocId>,
    attrs: Vec<(String, DocValue)>,
    children: Vec<(String, ChildSlot)>,
}

///
/// DocTree
///
/// Arena of document nodes. Scalar attributes live on the node; mapping and
/// list values are materialized as child nodes and reconstructed into
/// literals on read. Nodes replaced by `put` stay orphaned in the arena and
/// are simply unreachable.
///

#[derive(Clone, Debug)]
pub struct DocTree {
    nodes: Vec<Node>,
}

impl DocTree {
    pub const ROOT: DocId = DocId(0);

    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Build a tree whose root node carries the given data.
    pub fn from_data(data: &DocMap) -> Result<Self, DocumentError> {
        let mut tree = Self::new();
        tree.populate(Self::ROOT, data)?;
        Ok(tree)
    }

    fn alloc(&mut self, parent: DocId) -> DocId {
        let id = DocId(u32::try_from(self.nodes.len()).expect("document arena exceeds u32 ids"));
        self.nodes.push(Node {
            parent: Some(parent),
            ..Node::default()
        });
        id
    }

    fn node(&self, id: DocId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: DocId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    #[must_use]
    pub fn parent(&self, id: DocId) -> Option<DocId> {
        self.node(id).parent
    }

    /// Raw value for `key`, or `None` when absent. Nested documents are
    /// reconstructed into mapping/list literals.
    #[must_use]
    pub fn get(&self, id: DocId, key: &str) -> Option<DocValue> {
        let node = self.node(id);

        if let Some((_, value)) = node.attrs.iter().find(|(k, _)| k == key) {
            return Some(value.clone());
        }

        node.children
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, slot)| match slot {
                ChildSlot::Single(child) => DocValue::Map(self.export(*child)),
                ChildSlot::List(ids) => {
                    DocValue::List(ids.iter().map(|child| self.export(*child)).collect())
                }
            })
    }

    /// Store or overwrite `key`. Scalars land in the node's attributes;
    /// mapping/list values replace the node's child documents under `key`.
    pub fn put(&mut self, id: DocId, key: &str, value: DocValue) -> Result<(), DocumentError> {
        if key.is_empty() {
            return Err(DocumentError::EmptyKey);
        }

        match value {
            DocValue::Map(map) => {
                let child = self.alloc(id);
                self.populate(child, &map)?;
                self.set_child_slot(id, key, ChildSlot::Single(child));
            }
            DocValue::List(maps) => {
                let mut ids = Vec::with_capacity(maps.len());
                for map in &maps {
                    let child = self.alloc(id);
                    self.populate(child, map)?;
                    ids.push(child);
                }
                self.set_child_slot(id, key, ChildSlot::List(ids));
            }
            scalar => {
                let node = self.node_mut(id);
                node.children.retain(|(k, _)| k != key);
                match node.attrs.iter_mut().find(|(k, _)| k == key) {
                    Some(slot) => slot.1 = scalar,
                    None => node.attrs.push((key.to_string(), scalar)),
                }
            }
        }

        Ok(())
    }

    fn set_child_slot(&mut self, id: DocId, key: &str, slot: ChildSlot) {
        let node = self.node_mut(id);
        node.attrs.retain(|(k, _)| k != key);
        match node.children.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = slot,
            None => node.children.push((key.to_string(), slot)),
        }
    }

    /// Append an empty child document to the list under `key`. A single
    /// nested mapping already stored under `key` is folded into the list.
    pub fn add_child(&mut self, id: DocId, key: &str) -> Result<DocId, DocumentError> {
        if key.is_empty() {
            return Err(DocumentError::EmptyKey);
        }

        let child = self.alloc(id);
        let node = self.node_mut(id);
        node.attrs.retain(|(k, _)| k != key);

        match node.children.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => match slot {
                ChildSlot::List(ids) => ids.push(child),
                ChildSlot::Single(prev) => {
                    let prev = *prev;
                    *slot = ChildSlot::List(vec![prev, child]);
                }
            },
            None => node
                .children
                .push((key.to_string(), ChildSlot::List(vec![child]))),
        }

        Ok(child)
    }

    /// Ordered child ids under `key`; empty when the key is absent or scalar.
    #[must_use]
    pub fn children(&self, id: DocId, key: &str) -> Vec<DocId> {
        self.node(id)
            .children
            .iter()
            .find(|(k, _)| k == key)
            .map_or_else(Vec::new, |(_, slot)| slot.ids())
    }

    /// Keys under which this node carries nested documents, in stored order.
    #[must_use]
    pub fn child_keys(&self, id: DocId) -> Vec<String> {
        self.node(id)
            .children
            .iter()
            .map(|(k, _)| k.clone())
            .collect()
    }

    /// Reconstruct the mapping literal for the subtree rooted at `id`.
    /// Scalar attributes come first, nested documents after, each group in
    /// insertion order.
    #[must_use]
    pub fn export(&self, id: DocId) -> DocMap {
        let node = self.node(id);
        let mut map = DocMap::new();

        for (k, v) in &node.attrs {
            map.put(k.clone(), v.clone());
        }
        for (k, slot) in &node.children {
            let value = match slot {
                ChildSlot::Single(child) => DocValue::Map(self.export(*child)),
                ChildSlot::List(ids) => {
                    DocValue::List(ids.iter().map(|child| self.export(*child)).collect())
                }
            };
            map.put(k.clone(), value);
        }

        map
    }

    fn populate(&mut self, id: DocId, data: &DocMap) -> Result<(), DocumentError> {
        for (key, value) in data.iter() {
            self.put(id, key, value.clone())?;
        }
        Ok(())
    }
}

impl Default for DocTree {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
