//! In-memory entity store.
//!
//! Thread-safe implementation of [`EntityStore`] backed by a `HashMap` of
//! insertion-ordered vectors behind a tokio `RwLock`. Intended for tests,
//! development, and as a model for real backends.
//!
//! # Performance Characteristics
//!
//! * INSERT: O(n) per table (duplicate id check)
//! * FIND_BY_ID: O(n) per table
//! * QUERY: O(n) per table

use crate::storage::{EntityStore, EntityTable, Row, RowFilter, StorageError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory store.
///
/// Rows are kept per table in insertion order, which is the order `query`
/// returns them in.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<EntityTable, Vec<Row>>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get store statistics for debugging.
    pub async fn stats(&self) -> InMemoryStoreStats {
        let tables = self.tables.read().await;
        let mut tenants: Vec<u64> = tables
            .values()
            .flat_map(|rows| rows.iter().map(|row| row.tenant_id))
            .collect();
        tenants.sort_unstable();
        tenants.dedup();

        InMemoryStoreStats {
            table_count: tables.values().filter(|rows| !rows.is_empty()).count(),
            tenant_count: tenants.len(),
            total_rows: tables.values().map(Vec::len).sum(),
        }
    }

    /// Clear all data (useful for testing).
    pub async fn clear(&self) {
        self.tables.write().await.clear();
    }
}

impl EntityStore for InMemoryStore {
    type Error = StorageError;

    async fn insert(&self, table: EntityTable, row: Row) -> Result<Row, Self::Error> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table).or_default();

        if rows.iter().any(|existing| existing.id == row.id) {
            return Err(StorageError::duplicate_id(table, row.id));
        }

        rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, table: EntityTable, id: u64) -> Result<Option<Row>, Self::Error> {
        let tables = self.tables.read().await;

        Ok(tables
            .get(&table)
            .and_then(|rows| rows.iter().find(|row| row.id == id))
            .cloned())
    }

    async fn query(&self, table: EntityTable, filter: &RowFilter) -> Result<Vec<Row>, Self::Error> {
        let tables = self.tables.read().await;

        Ok(tables
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| filter.matches(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// Statistics about the current state of the in-memory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryStoreStats {
    /// Number of tables holding at least one row
    pub table_count: usize,
    /// Number of distinct tenants across all rows
    pub tenant_count: usize,
    /// Total number of rows
    pub total_rows: usize,
}
