//! Entity store abstraction for tenant-scoped records.
//!
//! The store is an external collaborator: this crate only needs to look rows
//! up by id and run simple tenant/team filters over a table. The
//! [`EntityStore`] trait captures exactly that, and [`InMemoryStore`] is a
//! reference implementation for tests and development.
//!
//! The store layer is NOT responsible for:
//! - deciding which tenant a request acts in
//! - deciding whether a principal may see a row
//!
//! Both are policy and live in [`crate::validation`] and [`crate::visibility`].
//!
//! # Example Usage
//!
//! ```rust
//! use tenant_scope::storage::{EntityStore, EntityTable, InMemoryStore, Row, RowFilter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! store.insert(EntityTable::Pipelines, Row::new(1, 10)).await?;
//! store.insert(EntityTable::Pipelines, Row::new(2, 20)).await?;
//!
//! let row = store.find_by_id(EntityTable::Pipelines, 1).await?;
//! assert_eq!(row.map(|r| r.tenant_id), Some(10));
//!
//! let filter = RowFilter::all().with_tenant(20);
//! let tenant_rows = store.query(EntityTable::Pipelines, &filter).await?;
//! assert_eq!(tenant_rows.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::{InMemoryStore, InMemoryStoreStats};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::str::FromStr;

/// Tables this layer knows how to reference or list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityTable {
    Pipelines,
    Stages,
    Products,
    QuoteTemplates,
    Users,
    Teams,
    Companies,
}

impl EntityTable {
    pub const ALL: [EntityTable; 7] = [
        EntityTable::Pipelines,
        EntityTable::Stages,
        EntityTable::Products,
        EntityTable::QuoteTemplates,
        EntityTable::Users,
        EntityTable::Teams,
        EntityTable::Companies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityTable::Pipelines => "pipelines",
            EntityTable::Stages => "stages",
            EntityTable::Products => "products",
            EntityTable::QuoteTemplates => "quote_templates",
            EntityTable::Users => "users",
            EntityTable::Teams => "teams",
            EntityTable::Companies => "companies",
        }
    }
}

impl fmt::Display for EntityTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityTable {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityTable::ALL
            .into_iter()
            .find(|table| table.as_str() == s)
            .ok_or_else(|| StorageError::UnknownTable {
                name: s.to_string(),
            })
    }
}

/// A stored row.
///
/// `team_ids` lists the owning team(s): for users their memberships, for
/// teams the team itself, for companies the team that owns the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: u64,
    pub tenant_id: u64,
    #[serde(default)]
    pub team_ids: Vec<u64>,
    #[serde(default)]
    pub attributes: Value,
}

impl Row {
    pub fn new(id: u64, tenant_id: u64) -> Self {
        Self {
            id,
            tenant_id,
            team_ids: Vec::new(),
            attributes: Value::Null,
        }
    }

    /// A team row owns itself.
    pub fn team(id: u64, tenant_id: u64) -> Self {
        Self::new(id, tenant_id).with_team(id)
    }

    pub fn with_team(mut self, team_id: u64) -> Self {
        if !self.team_ids.contains(&team_id) {
            self.team_ids.push(team_id);
        }
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.attributes = attributes;
        self
    }

    /// Display name from the `name` attribute.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}

/// Filter for [`EntityStore::query`]. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub tenant_id: Option<u64>,
    /// Match rows sharing at least one of these teams
    pub team_ids: Option<Vec<u64>>,
}

impl RowFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn in_teams(team_ids: Vec<u64>) -> Self {
        Self {
            tenant_id: None,
            team_ids: Some(team_ids),
        }
    }

    pub fn with_tenant(mut self, tenant_id: u64) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn matches(&self, row: &Row) -> bool {
        if let Some(tenant_id) = self.tenant_id {
            if row.tenant_id != tenant_id {
                return false;
            }
        }

        match &self.team_ids {
            Some(team_ids) => row.team_ids.iter().any(|id| team_ids.contains(id)),
            None => true,
        }
    }
}

/// Read access to persisted rows, plus insertion for seeding.
///
/// # Behavior
/// - `query` returns rows in insertion order; callers rely on that as the
///   listing order
/// - an empty result is an empty vector, never an error
pub trait EntityStore: Send + Sync {
    /// The error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert a row into a table and return it.
    fn insert(
        &self,
        table: EntityTable,
        row: Row,
    ) -> impl Future<Output = Result<Row, Self::Error>> + Send;

    /// Look a row up by id, regardless of tenant.
    fn find_by_id(
        &self,
        table: EntityTable,
        id: u64,
    ) -> impl Future<Output = Result<Option<Row>, Self::Error>> + Send;

    /// All rows in a table matching the filter, in insertion order.
    fn query(
        &self,
        table: EntityTable,
        filter: &RowFilter,
    ) -> impl Future<Output = Result<Vec<Row>, Self::Error>> + Send;
}
