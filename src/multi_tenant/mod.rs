//! Tenant resolution and per-request tenant context.
//!
//! # Architecture
//!
//! * **Resolution**: [`TenantResolver`] maps an authenticated principal to an
//!   effective tenant through a fixed fallback chain
//! * **Context**: [`TenantContext`] records the resolved tenant and how it was
//!   derived; [`RequestScope`] wraps it with a request id
//!
//! # Example Usage
//!
//! ```rust
//! use tenant_scope::multi_tenant::{ResolutionSource, TenantResolver, TenantScopeResolver};
//! use tenant_scope::Principal;
//!
//! let resolver = TenantScopeResolver::default();
//! let principal = Principal::new(12).with_tenant(3);
//!
//! let scope = resolver.request_scope(None, &principal);
//! assert_eq!(scope.tenant_id(), 3);
//! assert_eq!(scope.tenant.source, ResolutionSource::TenantField);
//! ```

pub mod context;
pub mod resolver;

pub use context::{RequestScope, ResolutionSource, TenantContext};
pub use resolver::{TenantResolver, TenantScopeResolver};
