//! Tenant resolution for authenticated principals.
//!
//! Maps a principal to the tenant every downstream read and reference check is
//! filtered by. Resolution walks a fixed fallback chain and never fails:
//!
//! 1. the principal's `tenant_id`, when present and non-zero
//! 2. the principal's user `id`, when present and non-zero
//! 3. the configured override for the principal's organization name
//! 4. the configured default tenant
//!
//! Step 2 is a compatibility shim for accounts that predate tenant ids. It
//! conflates user ids with tenant ids and should go once tenant data is
//! backfilled; until then it is kept exactly as-is.
//!
//! # Example Usage
//!
//! ```rust
//! use tenant_scope::multi_tenant::{TenantResolver, TenantScopeResolver};
//! use tenant_scope::Principal;
//!
//! let resolver = TenantScopeResolver::default();
//!
//! assert_eq!(resolver.resolve(&Principal::new(7).with_tenant(3)), 3);
//! assert_eq!(resolver.resolve(&Principal::new(7)), 7);
//! assert_eq!(resolver.resolve(&Principal::anonymous().with_organization("Globex LLC")), 4);
//! assert_eq!(resolver.resolve(&Principal::anonymous()), 1);
//! ```

use crate::config::ScopeConfig;
use crate::multi_tenant::context::{RequestScope, ResolutionSource, TenantContext};
use crate::principal::Principal;
use log::{debug, trace};

/// Trait for resolving the effective tenant of a principal.
///
/// Implementations must be pure: the same principal always resolves to the
/// same context, and resolution has no side effects.
pub trait TenantResolver: Send + Sync {
    /// Resolve a principal to a tenant context, recording which step matched.
    fn resolve_context(&self, principal: &Principal) -> TenantContext;

    /// Resolve a principal to its effective tenant id.
    fn resolve(&self, principal: &Principal) -> u64 {
        self.resolve_context(principal).effective_tenant_id
    }

    /// Resolve with an optional tenant header taking precedence.
    ///
    /// A zero header is treated as absent.
    fn resolve_with_header(&self, header: Option<u64>, principal: &Principal) -> TenantContext {
        match non_zero(header) {
            Some(tenant_id) => TenantContext::new(tenant_id, ResolutionSource::Header),
            None => self.resolve_context(principal),
        }
    }

    /// Build the request scope handed to downstream validation and listing.
    fn request_scope(&self, header: Option<u64>, principal: &Principal) -> RequestScope {
        let scope = RequestScope::with_generated_id(self.resolve_with_header(header, principal));
        debug!(
            "Request {} scoped to tenant {} via {:?}",
            scope.request_id,
            scope.tenant.effective_tenant_id,
            scope.tenant.source
        );
        scope
    }
}

/// Configuration-backed tenant resolver.
#[derive(Debug, Clone, Default)]
pub struct TenantScopeResolver {
    config: ScopeConfig,
}

impl TenantScopeResolver {
    pub fn new(config: ScopeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }
}

impl TenantResolver for TenantScopeResolver {
    fn resolve_context(&self, principal: &Principal) -> TenantContext {
        if let Some(tenant_id) = non_zero(principal.tenant_id) {
            return TenantContext::new(tenant_id, ResolutionSource::TenantField);
        }

        if let Some(user_id) = non_zero(principal.id) {
            trace!("Principal {} has no tenant, using user id as tenant", user_id);
            return TenantContext::new(user_id, ResolutionSource::LegacyUserId);
        }

        match self.config.organization_tenant(&principal.organization_name) {
            Some(tenant_id) => TenantContext::new(tenant_id, ResolutionSource::OrganizationName),
            None => {
                debug!(
                    "No tenant for organization '{}', falling back to default tenant {}",
                    principal.organization_name, self.config.default_tenant_id
                );
                TenantContext::new(self.config.default_tenant_id, ResolutionSource::Default)
            }
        }
    }
}

fn non_zero(value: Option<u64>) -> Option<u64> {
    value.filter(|v| *v != 0)
}
