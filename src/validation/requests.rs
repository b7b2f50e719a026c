//! Typed request payloads with tenant-scoped references.
//!
//! Every field is optional at the type level. Whether a missing field is an
//! error is decided by each request's [`ScopedRequest::validate`], so partial
//! updates only validate what the client actually sent.

use crate::error::ScopeResult;
use crate::multi_tenant::RequestScope;
use crate::storage::{EntityStore, EntityTable};
use crate::validation::{ScopedEntityValidator, ValidationReport, check_between, check_name};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

/// A request whose fields must be validated against the caller's tenant.
pub trait ScopedRequest: Send + Sync {
    /// Validate every field, returning all failures at once.
    fn validate<S: EntityStore>(
        &self,
        validator: &ScopedEntityValidator<S>,
        scope: &RequestScope,
    ) -> impl Future<Output = ScopeResult<()>> + Send;
}

/// Deserialize a JSON payload into a typed request.
pub fn parse_request<T: DeserializeOwned>(payload: Value) -> ScopeResult<T> {
    Ok(serde_json::from_value(payload)?)
}

/// Create a stage inside a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreStageRequest {
    pub name: Option<String>,
    pub pipeline_id: Option<u64>,
    pub probability: Option<i64>,
}

impl ScopedRequest for StoreStageRequest {
    async fn validate<S: EntityStore>(
        &self,
        validator: &ScopedEntityValidator<S>,
        scope: &RequestScope,
    ) -> ScopeResult<()> {
        let mut report = ValidationReport::new();

        match self.name.as_deref() {
            Some(name) => check_name(&mut report, "name", Some(name)),
            None => report.required("name"),
        }
        check_between(&mut report, "probability", self.probability, 0, 100);
        validator
            .check_required(
                &mut report,
                "pipeline_id",
                self.pipeline_id,
                EntityTable::Pipelines,
                scope,
            )
            .await?;

        report.into_result()
    }
}

/// Partial update of a stage; a stage may be moved to another pipeline of the
/// same tenant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateStageRequest {
    pub name: Option<String>,
    pub pipeline_id: Option<u64>,
    pub probability: Option<i64>,
}

impl ScopedRequest for UpdateStageRequest {
    async fn validate<S: EntityStore>(
        &self,
        validator: &ScopedEntityValidator<S>,
        scope: &RequestScope,
    ) -> ScopeResult<()> {
        let mut report = ValidationReport::new();

        check_name(&mut report, "name", self.name.as_deref());
        check_between(&mut report, "probability", self.probability, 0, 100);
        validator
            .check_optional(
                &mut report,
                "pipeline_id",
                self.pipeline_id,
                EntityTable::Pipelines,
                scope,
            )
            .await?;

        report.into_result()
    }
}

/// Partial update of a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdatePipelineRequest {
    pub name: Option<String>,
    pub is_default: Option<bool>,
}

impl ScopedRequest for UpdatePipelineRequest {
    async fn validate<S: EntityStore>(
        &self,
        _validator: &ScopedEntityValidator<S>,
        _scope: &RequestScope,
    ) -> ScopeResult<()> {
        let mut report = ValidationReport::new();
        check_name(&mut report, "name", self.name.as_deref());
        report.into_result()
    }
}

/// Partial update of a quote template and the products it bundles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateQuoteTemplateRequest {
    pub name: Option<String>,
    pub pipeline_id: Option<u64>,
    pub product_ids: Option<Vec<u64>>,
}

impl ScopedRequest for UpdateQuoteTemplateRequest {
    async fn validate<S: EntityStore>(
        &self,
        validator: &ScopedEntityValidator<S>,
        scope: &RequestScope,
    ) -> ScopeResult<()> {
        let mut report = ValidationReport::new();

        check_name(&mut report, "name", self.name.as_deref());
        validator
            .check_optional(
                &mut report,
                "pipeline_id",
                self.pipeline_id,
                EntityTable::Pipelines,
                scope,
            )
            .await?;
        validator
            .check_optional_list(
                &mut report,
                "product_ids",
                self.product_ids.as_deref(),
                EntityTable::Products,
                scope,
            )
            .await?;

        report.into_result()
    }
}
