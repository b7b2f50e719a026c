//! Reference checks against the caller's tenant.

use crate::error::{ScopeError, ScopeResult};
use crate::multi_tenant::RequestScope;
use crate::storage::{EntityStore, EntityTable};
use crate::validation::ValidationReport;
use log::debug;

/// Confirms client-supplied ids point at rows owned by the caller's tenant.
///
/// A row that exists in another tenant is indistinguishable from a missing
/// row to the caller; both fail with the same field message.
#[derive(Debug, Clone)]
pub struct ScopedEntityValidator<S> {
    store: S,
}

impl<S: EntityStore> ScopedEntityValidator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether `table` has a row with this id owned by `effective_tenant_id`.
    pub async fn validate_reference(
        &self,
        table: EntityTable,
        id: u64,
        effective_tenant_id: u64,
    ) -> ScopeResult<bool> {
        let row = self
            .store
            .find_by_id(table, id)
            .await
            .map_err(ScopeError::storage)?;

        let valid = match row {
            Some(row) => row.tenant_id == effective_tenant_id,
            None => false,
        };

        if !valid {
            debug!(
                "Rejected reference {}/{} for tenant {}",
                table, id, effective_tenant_id
            );
        }

        Ok(valid)
    }

    /// Validate an optional reference field. Absent means valid.
    pub async fn check_optional(
        &self,
        report: &mut ValidationReport,
        field: &str,
        value: Option<u64>,
        table: EntityTable,
        scope: &RequestScope,
    ) -> ScopeResult<()> {
        let Some(id) = value else {
            return Ok(());
        };

        if !self.validate_reference(table, id, scope.tenant_id()).await? {
            report.invalid_reference(field);
        }
        Ok(())
    }

    /// Validate a reference field that must be present.
    pub async fn check_required(
        &self,
        report: &mut ValidationReport,
        field: &str,
        value: Option<u64>,
        table: EntityTable,
        scope: &RequestScope,
    ) -> ScopeResult<()> {
        match value {
            Some(_) => self.check_optional(report, field, value, table, scope).await,
            None => {
                report.required(field);
                Ok(())
            }
        }
    }

    /// Validate an optional list of references, reporting each bad element
    /// as `field.index`.
    pub async fn check_optional_list(
        &self,
        report: &mut ValidationReport,
        field: &str,
        values: Option<&[u64]>,
        table: EntityTable,
        scope: &RequestScope,
    ) -> ScopeResult<()> {
        let Some(values) = values else {
            return Ok(());
        };

        for (index, id) in values.iter().enumerate() {
            if !self.validate_reference(table, *id, scope.tenant_id()).await? {
                report.invalid_reference(&format!("{}.{}", field, index));
            }
        }
        Ok(())
    }
}
