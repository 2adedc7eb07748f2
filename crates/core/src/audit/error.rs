//! Audit auto-fill error types.

use thiserror::Error;

/// Audit auto-fill errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditError {
    /// The entity does not expose a setter for an audit field.
    #[error("entity {entity} does not support audit field `{field}`")]
    Unsupported {
        /// Type name of the entity.
        entity: &'static str,
        /// Name of the missing field.
        field: &'static str,
    },
}

impl AuditError {
    /// Create an unsupported-field error for entity type `E`.
    #[must_use]
    pub fn unsupported<E: ?Sized>(field: &'static str) -> Self {
        Self::Unsupported {
            entity: std::any::type_name::<E>(),
            field,
        }
    }
}
