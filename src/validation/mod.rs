//! Tenant-scoped request validation.
//!
//! Client payloads often carry foreign keys (`pipeline_id`, `product_ids`)
//! that must point at rows owned by the caller's tenant. This module checks
//! those references and collects every failure into a per-field report
//! instead of stopping at the first one.
//!
//! Optional fields use "sometimes" semantics: an absent field is not
//! validated at all, a present one is validated in full.
//!
//! # Example Usage
//!
//! ```rust
//! use tenant_scope::multi_tenant::{TenantResolver, TenantScopeResolver};
//! use tenant_scope::storage::{EntityStore, EntityTable, InMemoryStore, Row};
//! use tenant_scope::validation::{ScopedEntityValidator, ScopedRequest, UpdateStageRequest};
//! use tenant_scope::Principal;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = InMemoryStore::new();
//! store.insert(EntityTable::Pipelines, Row::new(1, 3)).await?;
//! store.insert(EntityTable::Pipelines, Row::new(2, 8)).await?;
//!
//! let principal = Principal::new(5).with_tenant(3);
//! let scope = TenantScopeResolver::default().request_scope(None, &principal);
//! let validator = ScopedEntityValidator::new(store);
//!
//! let ok = UpdateStageRequest { pipeline_id: Some(1), ..Default::default() };
//! assert!(ok.validate(&validator, &scope).await.is_ok());
//!
//! let cross_tenant = UpdateStageRequest { pipeline_id: Some(2), ..Default::default() };
//! let err = cross_tenant.validate(&validator, &scope).await.unwrap_err();
//! assert!(err.field_errors().unwrap().contains("pipeline_id"));
//! # Ok(())
//! # }
//! ```

pub mod requests;
pub mod validator;

pub use requests::{
    ScopedRequest, StoreStageRequest, UpdatePipelineRequest, UpdateQuoteTemplateRequest,
    UpdateStageRequest, parse_request,
};
pub use validator::ScopedEntityValidator;

use crate::error::{FieldErrors, ScopeError, ScopeResult};

/// Maximum length of free-text name fields.
pub const MAX_NAME_LENGTH: usize = 255;

/// Accumulates per-field failures for a single request.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: FieldErrors,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an arbitrary message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn required(&mut self, field: &str) {
        self.add(field, format!("The {} field is required.", field));
    }

    pub fn invalid_reference(&mut self, field: &str) {
        self.add(field, format!("The selected {} is invalid.", field));
    }

    pub fn blank(&mut self, field: &str) {
        self.add(field, format!("The {} field must not be blank.", field));
    }

    pub fn too_long(&mut self, field: &str, max: usize) {
        self.add(
            field,
            format!(
                "The {} field must not be greater than {} characters.",
                field, max
            ),
        );
    }

    pub fn out_of_range(&mut self, field: &str, min: i64, max: i64) {
        self.add(
            field,
            format!("The {} field must be between {} and {}.", field, min, max),
        );
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Finish the report: `Ok` when nothing failed, otherwise every message.
    pub fn into_result(self) -> ScopeResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ScopeError::Validation(self.errors))
        }
    }
}

/// Optional free-text name: non-blank and bounded when present.
pub fn check_name(report: &mut ValidationReport, field: &str, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };

    if value.trim().is_empty() {
        report.blank(field);
    } else if value.chars().count() > MAX_NAME_LENGTH {
        report.too_long(field, MAX_NAME_LENGTH);
    }
}

/// Optional integer that must fall within `min..=max` when present.
pub fn check_between(
    report: &mut ValidationReport,
    field: &str,
    value: Option<i64>,
    min: i64,
    max: i64,
) {
    if let Some(value) = value {
        if !(min..=max).contains(&value) {
            report.out_of_range(field, min, max);
        }
    }
}
