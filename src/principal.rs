//! The authenticated actor making a request.
//!
//! Principals are produced by the authentication layer upstream of this crate.
//! Nothing here authenticates anything; the types only carry what the resolver
//! and visibility filter need.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role assigned to a principal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    #[default]
    TeamMember,
    /// Any role this layer has no special handling for
    #[serde(untagged)]
    Other(String),
}

/// An authenticated principal.
///
/// `id` and `tenant_id` are optional because legacy accounts may lack either;
/// a stored zero is treated the same as absent during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Principal {
    pub id: Option<u64>,
    pub tenant_id: Option<u64>,
    pub organization_name: String,
    pub role: Role,
    pub capabilities: BTreeSet<String>,
    /// Teams the principal belongs to
    pub team_ids: Vec<u64>,
}

impl Principal {
    /// Create a principal with the given user id and no tenant.
    pub fn new(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    /// Create a principal with no identifiers at all.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_tenant(mut self, tenant_id: u64) -> Self {
        self.tenant_id = Some(tenant_id);
        self
    }

    pub fn with_organization(mut self, organization_name: impl Into<String>) -> Self {
        self.organization_name = organization_name.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    pub fn with_team(mut self, team_id: u64) -> Self {
        if !self.team_ids.contains(&team_id) {
            self.team_ids.push(team_id);
        }
        self
    }

    /// Whether the principal has been granted a named capability.
    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Whether the principal is an administrator.
    ///
    /// Either the `Admin` role or the configured admin capability qualifies.
    pub fn is_admin(&self, admin_capability: &str) -> bool {
        self.role == Role::Admin || self.has_capability(admin_capability)
    }

    /// Whether the principal shares at least one team with `team_ids`.
    pub fn shares_team_with(&self, team_ids: &[u64]) -> bool {
        team_ids.iter().any(|team_id| self.team_ids.contains(team_id))
    }
}
