//! Per-request tenant context.
//!
//! A [`RequestScope`] is built once at the request boundary and passed
//! explicitly to everything downstream that needs to know which tenant the
//! request acts in. There is no ambient or global tenant lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which resolution step produced the effective tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Explicit non-zero tenant header on the inbound request
    Header,
    /// The principal's own `tenant_id`
    TenantField,
    /// The principal's user id standing in for a tenant id.
    ///
    /// Compatibility shim for accounts created before tenant ids were
    /// backfilled. The two id spaces are unrelated.
    LegacyUserId,
    /// Organization name matched the configured override table
    OrganizationName,
    /// Nothing matched; the configured default tenant
    Default,
}

impl ResolutionSource {
    /// Whether resolution had to guess rather than read an identifier.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::OrganizationName | Self::Default)
    }
}

/// Effective tenant for a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantContext {
    pub effective_tenant_id: u64,
    pub source: ResolutionSource,
}

impl TenantContext {
    pub fn new(effective_tenant_id: u64, source: ResolutionSource) -> Self {
        Self {
            effective_tenant_id,
            source,
        }
    }

    pub fn tenant_id(&self) -> u64 {
        self.effective_tenant_id
    }
}

/// Everything a downstream call needs to know about the current request.
#[derive(Debug, Clone)]
pub struct RequestScope {
    /// Unique identifier for log correlation
    pub request_id: String,
    pub tenant: TenantContext,
    pub started_at: DateTime<Utc>,
}

impl RequestScope {
    /// Create a scope with a specific request id.
    pub fn new(request_id: impl Into<String>, tenant: TenantContext) -> Self {
        Self {
            request_id: request_id.into(),
            tenant,
            started_at: Utc::now(),
        }
    }

    /// Create a scope with a generated request id.
    pub fn with_generated_id(tenant: TenantContext) -> Self {
        Self::new(Uuid::new_v4().to_string(), tenant)
    }

    pub fn tenant_id(&self) -> u64 {
        self.tenant.effective_tenant_id
    }
}
