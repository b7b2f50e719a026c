//! Shared fixtures for the integration suite.
//!
//! The seeded store models two tenants of a CRM:
//!
//! | tenant | pipelines | stages | products | teams  | users (team)          |
//! |--------|-----------|--------|----------|--------|-----------------------|
//! | 3      | 1, 2      | 100    | 10, 12   | 30, 31 | 300 (30), 301 (31)    |
//! | 4      | 5         | 101    | 11       | 40     | 400 (40), 302 (30,40) |
//!
//! Tenant 4 is also the tenant "Globex LLC" resolves to by default.

use serde_json::json;
use tenant_scope::storage::{
    EntityStore, EntityTable, InMemoryStore, Row, RowFilter, StorageError,
};
use tenant_scope::{RequestScope, ResolutionSource, TenantContext};

pub const ACME_TENANT: u64 = 3;
pub const GLOBEX_TENANT: u64 = 4;

/// Initialise logging once per test binary; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a request scope for a fixed tenant.
pub fn scope_for(tenant_id: u64) -> RequestScope {
    RequestScope::new(
        format!("test-request-{}", tenant_id),
        TenantContext::new(tenant_id, ResolutionSource::TenantField),
    )
}

fn named(id: u64, tenant_id: u64, name: &str) -> Row {
    Row::new(id, tenant_id).with_attributes(json!({ "name": name }))
}

/// Store seeded with the two-tenant layout described in the module docs.
pub async fn seeded_store() -> InMemoryStore {
    init_logging();
    let store = InMemoryStore::new();

    let rows = [
        (EntityTable::Pipelines, named(1, ACME_TENANT, "Acme Sales")),
        (EntityTable::Pipelines, named(2, ACME_TENANT, "Acme Renewals")),
        (EntityTable::Pipelines, named(5, GLOBEX_TENANT, "Globex Sales")),
        (EntityTable::Stages, named(100, ACME_TENANT, "Qualified")),
        (EntityTable::Stages, named(101, GLOBEX_TENANT, "Qualified")),
        (EntityTable::Products, named(10, ACME_TENANT, "Widget")),
        (EntityTable::Products, named(11, GLOBEX_TENANT, "Gadget")),
        (EntityTable::Products, named(12, ACME_TENANT, "Gizmo")),
        (EntityTable::QuoteTemplates, named(50, ACME_TENANT, "Standard")),
        (EntityTable::Teams, Row::team(30, ACME_TENANT)),
        (EntityTable::Teams, Row::team(31, ACME_TENANT)),
        (EntityTable::Teams, Row::team(40, GLOBEX_TENANT)),
        (
            EntityTable::Users,
            named(300, ACME_TENANT, "Ada").with_team(30),
        ),
        (
            EntityTable::Users,
            named(301, ACME_TENANT, "Brendan").with_team(31),
        ),
        (
            EntityTable::Users,
            named(400, GLOBEX_TENANT, "Carmen").with_team(40),
        ),
        (
            EntityTable::Users,
            named(302, GLOBEX_TENANT, "Dmitri").with_team(30).with_team(40),
        ),
        (
            EntityTable::Companies,
            named(700, ACME_TENANT, "Initech").with_team(31),
        ),
    ];

    for (table, row) in rows {
        store.insert(table, row).await.expect("seed row");
    }
    store
}

/// Store whose every operation fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStore;

impl EntityStore for UnavailableStore {
    type Error = StorageError;

    async fn insert(&self, _table: EntityTable, _row: Row) -> Result<Row, Self::Error> {
        Err(StorageError::unavailable("down"))
    }

    async fn find_by_id(&self, _table: EntityTable, _id: u64) -> Result<Option<Row>, Self::Error> {
        Err(StorageError::unavailable("down"))
    }

    async fn query(
        &self,
        _table: EntityTable,
        _filter: &RowFilter,
    ) -> Result<Vec<Row>, Self::Error> {
        Err(StorageError::unavailable("down"))
    }
}
