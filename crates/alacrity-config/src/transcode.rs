use crate::{base::BaseDocument, document::Document, error::DocumentError, value::DocMap};
use thiserror::Error as ThisError;

///
/// TranscodeError
///

#[derive(Debug, ThisError)]
pub enum TranscodeError {
    #[error("configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Load a persisted configuration tree. The top level must be a JSON
/// object; its entries follow the dbms/schema/table/column vocabulary.
pub fn load(json: &str) -> Result<BaseDocument, TranscodeError> {
    let data: DocMap = serde_json::from_str(json)?;
    Ok(BaseDocument::from_data(&data)?)
}

/// Persist the current state of a document subtree.
pub fn save<D: Document>(document: &D) -> Result<String, TranscodeError> {
    Ok(serde_json::to_string_pretty(&document.data())?)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{node::keys, value::DocValue};

    #[test]
    fn load_save_round_trip() {
        let json = r#"{"name":"project","dbmses":[{"name":"db0","schemas":[{"name":"public"}]}]}"#;
        let doc = load(json).unwrap();

        assert_eq!(
            doc.get(keys::NAME),
            Some(DocValue::Text("project".to_string()))
        );

        let out = save(&doc).unwrap();
        let reloaded = load(&out).unwrap();
        assert_eq!(reloaded.data(), doc.data());
    }

    #[test]
    fn top_level_scalar_is_rejected() {
        assert!(matches!(load("42"), Err(TranscodeError::Json(_))));
    }
}
