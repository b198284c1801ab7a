use thiserror::Error as ThisError;

///
/// DocumentError
///
/// Write-boundary and argument failures raised by the document model.
/// All variants are programming-error signals; nothing here is retried.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum DocumentError {
    /// Unsupported-operation kind: the document is frozen.
    #[error("document is immutable: cannot write key `{key}`")]
    Immutable { key: String },

    /// Null-argument kind: keys must be non-empty.
    #[error("document key must be non-empty")]
    EmptyKey,

    /// Null-argument kind: names written through mutators must be non-empty.
    #[error("document name must be non-empty")]
    EmptyName,

    /// A typed accessor required an attribute the document does not carry.
    #[error("missing required attribute `{key}`")]
    MissingAttribute { key: String },
}

impl DocumentError {
    pub(crate) fn immutable(key: &str) -> Self {
        Self::Immutable {
            key: key.to_string(),
        }
    }

    pub(crate) fn missing_attribute(key: &str) -> Self {
        Self::MissingAttribute {
            key: key.to_string(),
        }
    }
}
