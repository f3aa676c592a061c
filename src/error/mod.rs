//! Error handling for declaration and projection.

use crate::schema::FieldKey;

/// A field list that cannot be turned into a schema.
///
/// Raised by the schema builder as soon as the offending declaration is
/// made. It is `Clone` so a failed once-initialised registry can hand the
/// same error to every caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// The key is empty, or a symbol key is not an identifier-like atom
    #[error("{type_name}: malformed field key {key:?}: {reason}")]
    MalformedKey {
        type_name: &'static str,
        key: String,
        reason: &'static str,
    },

    /// The same key appears twice in one declaration
    #[error("{type_name}: field {key} declared more than once in a single declaration")]
    DuplicateKey {
        type_name: &'static str,
        key: FieldKey,
    },
}

/// Errors raised while projecting an instance
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// The type's schema could not be declared
    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    /// An attribute-reference field has no matching accessor on the instance
    #[error("{type_name} has no accessor `{accessor}`")]
    Resolution {
        type_name: &'static str,
        accessor: String,
    },

    /// A computed field or accessor failed; the original error is kept as-is
    #[error(transparent)]
    Evaluation(anyhow::Error),
}

impl ProjectionError {
    /// Name of the missing accessor, if this is a resolution failure
    #[must_use]
    pub fn missing_accessor(&self) -> Option<&str> {
        match self {
            Self::Resolution { accessor, .. } => Some(accessor),
            _ => None,
        }
    }
}

/// Result type for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;
