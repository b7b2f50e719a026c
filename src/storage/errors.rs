//! Store-level error types.
//!
//! These describe failures of the store itself. A row that exists but belongs
//! to another tenant is not a store error; that is a validation outcome.

use crate::storage::EntityTable;

/// Errors that can occur during entity store operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A row with this id already exists in the table.
    #[error("Row already exists: {table}/{id}")]
    DuplicateId { table: EntityTable, id: u64 },

    /// A table name did not match any known table.
    #[error("Unknown table: {name}")]
    UnknownTable { name: String },

    /// The backing store is temporarily unavailable.
    #[error("Entity store unavailable: {message}")]
    Unavailable { message: String },

    /// Generic internal store error.
    #[error("Internal entity store error: {message}")]
    Internal { message: String },
}

impl StorageError {
    pub fn duplicate_id(table: EntityTable, id: u64) -> Self {
        Self::DuplicateId { table, id }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether retrying the operation later could succeed.
    pub fn is_temporary(&self) -> bool {
        matches!(self, StorageError::Unavailable { .. })
    }
}
