//! Role-based visibility for assignment dropdowns.
//!
//! When a user assigns a record to someone, the list of people, teams, or
//! companies offered depends on who is asking. Administrators see every
//! candidate; everyone else only sees candidates in their own tenant that
//! share one of their teams.
//!
//! # Example Usage
//!
//! ```rust
//! use tenant_scope::storage::{EntityStore, EntityTable, InMemoryStore, Row};
//! use tenant_scope::visibility::{AssignmentVisibilityFilter, CandidateKind};
//! use tenant_scope::{Principal, Role, ScopeConfig, TenantResolver, TenantScopeResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! store.insert(EntityTable::Users, Row::new(1, 1).with_team(10)).await?;
//! store.insert(EntityTable::Users, Row::new(2, 1).with_team(20)).await?;
//!
//! let resolver = TenantScopeResolver::default();
//! let filter = AssignmentVisibilityFilter::new(store, ScopeConfig::default());
//!
//! let member = Principal::new(1).with_tenant(1).with_team(10);
//! let scope = resolver.request_scope(None, &member);
//! let users = filter.list_candidates(&member, &scope, CandidateKind::Users).await?;
//! assert_eq!(users.len(), 1);
//!
//! let admin = Principal::new(3).with_tenant(1).with_role(Role::Admin);
//! let scope = resolver.request_scope(None, &admin);
//! let users = filter.list_candidates(&admin, &scope, CandidateKind::Users).await?;
//! assert_eq!(users.len(), 2);
//! # Ok(())
//! # }
//! ```

use crate::config::ScopeConfig;
use crate::error::{ScopeError, ScopeResult};
use crate::multi_tenant::RequestScope;
use crate::principal::Principal;
use crate::storage::{EntityStore, EntityTable, Row, RowFilter};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of assignee is being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    Users,
    Teams,
    Companies,
}

impl CandidateKind {
    pub fn table(&self) -> EntityTable {
        match self {
            CandidateKind::Users => EntityTable::Users,
            CandidateKind::Teams => EntityTable::Teams,
            CandidateKind::Companies => EntityTable::Companies,
        }
    }
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table().as_str())
    }
}

/// Read-only projection of a row offered for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    pub kind: CandidateKind,
    pub name: Option<String>,
    pub team_ids: Vec<u64>,
}

impl Candidate {
    fn from_row(kind: CandidateKind, row: Row) -> Self {
        Self {
            id: row.id,
            kind,
            name: row.name().map(str::to_string),
            team_ids: row.team_ids,
        }
    }
}

/// Lists assignment candidates a principal is allowed to see.
#[derive(Debug, Clone)]
pub struct AssignmentVisibilityFilter<S> {
    store: S,
    config: ScopeConfig,
}

impl<S: EntityStore> AssignmentVisibilityFilter<S> {
    pub fn new(store: S, config: ScopeConfig) -> Self {
        Self { store, config }
    }

    /// Whether the principal bypasses team filtering.
    pub fn is_admin(&self, principal: &Principal) -> bool {
        principal.is_admin(&self.config.admin_capability)
    }

    /// Filter describing what `principal` may see within `scope`.
    pub fn visibility_filter(&self, principal: &Principal, scope: &RequestScope) -> RowFilter {
        if self.is_admin(principal) {
            RowFilter::all()
        } else {
            RowFilter::in_teams(principal.team_ids.clone()).with_tenant(scope.tenant_id())
        }
    }

    /// Candidates of `kind` visible to `principal`, in store order.
    ///
    /// Administrators see every candidate regardless of tenant or team. Other
    /// principals see candidates in the scope's tenant sharing at least one
    /// team; a principal with no teams sees nothing.
    pub async fn list_candidates(
        &self,
        principal: &Principal,
        scope: &RequestScope,
        kind: CandidateKind,
    ) -> ScopeResult<Vec<Candidate>> {
        let filter = self.visibility_filter(principal, scope);
        if filter.team_ids.is_none() {
            trace!("Principal {:?} is admin, listing all {}", principal.id, kind);
        }

        let rows = self
            .store
            .query(kind.table(), &filter)
            .await
            .map_err(ScopeError::storage)?;

        Ok(rows
            .into_iter()
            .map(|row| Candidate::from_row(kind, row))
            .collect())
    }
}
