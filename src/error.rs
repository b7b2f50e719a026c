//! Error types for tenant scope operations.
//!
//! Everything that can go wrong in this layer is request-scoped: a client
//! referenced an entity outside its tenant, the store failed underneath us, or
//! the configuration handed to us at startup is unusable. Tenant resolution
//! itself never fails.

use crate::config::ConfigError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Main error type for tenant scope operations.
#[derive(Debug, thiserror::Error)]
pub enum ScopeError {
    /// One or more request fields failed validation
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Errors from the underlying entity store
    #[error("Entity store error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request payload could not be deserialized
    #[error("Malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Scope configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ScopeError {
    /// Wrap an entity store error
    pub fn storage<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(error))
    }

    /// Field errors carried by a validation failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Per-field validation messages, keyed by field name.
///
/// Serializes as `{"pipeline_id": ["The selected pipeline_id is invalid."]}`,
/// which is the shape the downstream error response expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Create an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Messages recorded for a field.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Whether the field has at least one message.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Names of the failing fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields (not messages).
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for messages in self.fields.values() {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}", message)?;
                first = false;
            }
        }
        Ok(())
    }
}

pub type ScopeResult<T> = Result<T, ScopeError>;
