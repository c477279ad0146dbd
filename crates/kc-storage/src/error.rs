//! Storage error types.

use thiserror::Error;
use uuid::Uuid;

/// Failures reported by a [`ClientProvider`](crate::ClientProvider) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No record with this internal id.
    #[error("{entity_type} {id} does not exist")]
    NotFound {
        /// Kind of record, e.g. `"Client"`.
        entity_type: &'static str,
        /// Internal id that was looked up.
        id: Uuid,
    },

    /// A unique field is already taken.
    #[error("{entity_type} with {field} '{value}' is already registered")]
    Duplicate {
        /// Kind of record.
        entity_type: &'static str,
        /// Unique field that collided.
        field: &'static str,
        /// Value already in use.
        value: String,
    },

    /// The backend could not be reached.
    #[error("storage backend unavailable: {0}")]
    Connection(String),

    /// The backend failed while serving the request.
    #[error("storage backend failure: {0}")]
    Internal(String),
}

impl StorageError {
    /// Record with internal id `id` does not exist.
    #[must_use]
    pub const fn not_found(entity_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// Unique `field` already holds `value`.
    #[must_use]
    pub fn duplicate(
        entity_type: &'static str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::Duplicate {
            entity_type,
            field,
            value: value.into(),
        }
    }

    /// Returns true for [`Self::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`Self::Duplicate`].
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Returns true when the backend itself failed rather than rejecting
    /// the request.
    #[must_use]
    pub const fn is_backend_failure(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Internal(_))
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
