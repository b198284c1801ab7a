use crate::{document::Document, node::keys, value::DocValue};

/// All documents of the subtree rooted at `root`, depth-first pre-order.
/// Child lists are visited in stored key order.
pub fn traverse<D: Document>(root: &D) -> Vec<D> {
    let mut out = Vec::new();
    visit(root, &mut out);
    out
}

fn visit<D: Document>(doc: &D, out: &mut Vec<D>) {
    out.push(doc.clone());
    for key in doc.child_keys() {
        for child in doc.child_documents(&key).iter() {
            visit(child, out);
        }
    }
}

/// Dot/slash-joined path of `name` attributes from just below `ancestor`
/// down to `doc`. Unnamed documents on the path contribute nothing; if
/// `ancestor` is not actually an ancestor, the path starts at the root.
#[must_use]
pub fn relative_name<D: Document>(doc: &D, ancestor: &D, separator: char) -> String {
    let mut names = Vec::new();
    let mut cursor = doc.clone();

    while cursor != *ancestor {
        if let Some(DocValue::Text(name)) = cursor.get(keys::NAME) {
            names.push(name);
        }
        match cursor.parent() {
            Some(parent) => cursor = parent,
            None => break,
        }
    }

    names.reverse();
    names.join(&separator.to_string())
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base::BaseDocument, value::DocValue};

    fn named_child(parent: &BaseDocument, key: &str, name: &str) -> BaseDocument {
        let child = parent.add_child(key).unwrap();
        child.put(keys::NAME, DocValue::from(name)).unwrap();
        child
    }

    #[test]
    fn traverse_is_preorder() {
        let root = BaseDocument::new();
        root.put(keys::NAME, DocValue::from("project")).unwrap();
        let dbms = named_child(&root, keys::DBMSES, "db0");
        named_child(&dbms, keys::SCHEMAS, "public");
        named_child(&root, keys::DBMSES, "db1");

        let names: Vec<_> = traverse(&root)
            .iter()
            .map(|d| match d.get(keys::NAME) {
                Some(DocValue::Text(n)) => n,
                _ => String::new(),
            })
            .collect();

        assert_eq!(names, ["project", "db0", "public", "db1"]);
    }

    #[test]
    fn relative_name_joins_path_below_ancestor() {
        let root = BaseDocument::new();
        root.put(keys::NAME, DocValue::from("project")).unwrap();
        let dbms = named_child(&root, keys::DBMSES, "db0");
        let schema = named_child(&dbms, keys::SCHEMAS, "public");
        let table = named_child(&schema, keys::TABLES, "orders");

        assert_eq!(relative_name(&table, &root, '.'), "db0.public.orders");
        assert_eq!(relative_name(&table, &dbms, '.'), "public.orders");
        assert_eq!(relative_name(&dbms, &root, '.'), "db0");
    }

    #[test]
    fn relative_name_of_self_is_empty() {
        let root = BaseDocument::new();
        root.put(keys::NAME, DocValue::from("project")).unwrap();

        assert_eq!(relative_name(&root, &root, '.'), "");
    }
}
