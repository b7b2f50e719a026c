//! Tenant-scoped entity resolution and assignment visibility for
//! multi-tenant CRM backends.
//!
//! An inbound request carries an authenticated [`Principal`]. This crate
//! turns that principal into an explicit tenant scope, checks client-supplied
//! references (pipelines, stages, products, quote templates) against the
//! scope, and decides which users, teams, or companies the principal may be
//! offered for assignment.
//!
//! # Core Components
//!
//! - [`TenantScopeResolver`] - Principal to effective tenant
//! - [`ScopedEntityValidator`] - Foreign-key checks within a tenant
//! - [`AssignmentVisibilityFilter`] - Role-based candidate listing
//! - [`EntityStore`] - Trait for the persistent store underneath
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tenant_scope::{
//!     AssignmentVisibilityFilter, CandidateKind, InMemoryStore, Principal, ScopeConfig,
//!     ScopedEntityValidator, ScopedRequest, TenantResolver, TenantScopeResolver,
//!     UpdateStageRequest,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScopeConfig::from_path("scope.json")?;
//! let store = InMemoryStore::new();
//!
//! let resolver = TenantScopeResolver::new(config.clone());
//! let validator = ScopedEntityValidator::new(store.clone());
//! let visibility = AssignmentVisibilityFilter::new(store, config);
//!
//! let principal = Principal::new(12).with_tenant(3).with_team(7);
//! let scope = resolver.request_scope(None, &principal);
//!
//! let request = UpdateStageRequest { pipeline_id: Some(4), ..Default::default() };
//! request.validate(&validator, &scope).await?;
//!
//! let assignees = visibility.list_candidates(&principal, &scope, CandidateKind::Users).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod multi_tenant;
pub mod principal;
pub mod storage;
pub mod validation;
pub mod visibility;

pub use config::{ConfigError, ScopeConfig};
pub use error::{FieldErrors, ScopeError, ScopeResult};
pub use multi_tenant::{
    RequestScope, ResolutionSource, TenantContext, TenantResolver, TenantScopeResolver,
};
pub use principal::{Principal, Role};
pub use storage::{EntityStore, EntityTable, InMemoryStore, Row, RowFilter, StorageError};
pub use validation::{
    ScopedEntityValidator, ScopedRequest, StoreStageRequest, UpdatePipelineRequest,
    UpdateQuoteTemplateRequest, UpdateStageRequest, ValidationReport,
};
pub use visibility::{AssignmentVisibilityFilter, Candidate, CandidateKind};
