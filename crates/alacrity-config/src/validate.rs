use crate::{document::Document, node::Project, traits::HasName};
use std::fmt;

///
/// ErrorTree
///
/// Accumulates validation complaints so one pass reports everything.
///

#[derive(Debug, Default)]
pub struct ErrorTree {
    errors: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.errors.join("; "))
    }
}

impl std::error::Error for ErrorTree {}

/// Structural checks over a project tree: every node carries a non-empty
/// name, ports are in range. Runs before the tree is frozen and published.
pub fn validate_project<D: Document>(project: &Project<D>) -> Result<(), ErrorTree> {
    let mut errs = ErrorTree::new();

    if project.name().is_err() {
        errs.add("project has no name");
    }

    for dbms in project.dbmses().iter() {
        let label = dbms.name().unwrap_or_else(|_| "<unnamed>".to_string());

        if dbms.name().is_err() {
            errs.add("dbms has no name");
        }
        if let Some(port) = dbms.port() {
            if !(0..=65535).contains(&port) {
                errs.add(format!("dbms `{label}`: port {port} out of range"));
            }
        }

        for schema in dbms.schemas().iter() {
            if schema.name().is_err() {
                errs.add(format!("dbms `{label}`: schema has no name"));
            }
            for table in schema.tables().iter() {
                if table.name().is_err() {
                    errs.add("table has no name");
                }
                for column in table.columns().iter() {
                    if column.name().is_err() {
                        let table = table.name().unwrap_or_else(|_| "<unnamed>".to_string());
                        errs.add(format!("table `{table}`: column has no name"));
                    }
                }
            }
        }
    }

    errs.result()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{base::BaseDocument, node::keys, value::DocValue};

    fn project_with(port: i64) -> Project<BaseDocument> {
        let doc = BaseDocument::new();
        doc.put(keys::NAME, DocValue::from("project")).unwrap();
        let dbms = doc.add_child(keys::DBMSES).unwrap();
        dbms.put(keys::NAME, DocValue::from("db0")).unwrap();
        dbms.put(keys::PORT, DocValue::from(port)).unwrap();
        Project::new(doc)
    }

    #[test]
    fn valid_project_passes() {
        assert!(validate_project(&project_with(5432)).is_ok());
    }

    #[test]
    fn out_of_range_port_is_reported() {
        let err = validate_project(&project_with(70000)).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.to_string().contains("port 70000 out of range"));
    }

    #[test]
    fn all_complaints_are_collected() {
        let doc = BaseDocument::new();
        doc.add_child(keys::DBMSES).unwrap();

        let err = validate_project(&Project::new(doc)).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
