//! Typed request payloads validated end to end, from principal to field errors.

use crate::common::{ACME_TENANT, seeded_store};
use serde_json::json;
use tenant_scope::validation::parse_request;
use tenant_scope::{
    Principal, ScopeError, ScopedEntityValidator, ScopedRequest, StoreStageRequest,
    TenantResolver, TenantScopeResolver, UpdateQuoteTemplateRequest, UpdateStageRequest,
};

#[tokio::test]
async fn stage_update_moves_within_tenant() {
    let validator = ScopedEntityValidator::new(seeded_store().await);
    let resolver = TenantScopeResolver::default();
    let scope = resolver.request_scope(None, &Principal::new(300).with_tenant(ACME_TENANT));

    let request: UpdateStageRequest = parse_request(json!({"pipeline_id": 2})).unwrap();
    assert!(request.validate(&validator, &scope).await.is_ok());
}

#[tokio::test]
async fn stage_update_cannot_reach_other_tenant() {
    let validator = ScopedEntityValidator::new(seeded_store().await);
    let resolver = TenantScopeResolver::default();
    let scope = resolver.request_scope(None, &Principal::new(300).with_tenant(ACME_TENANT));

    let request: UpdateStageRequest = parse_request(json!({"pipeline_id": 5})).unwrap();
    let err = request.validate(&validator, &scope).await.unwrap_err();

    let ScopeError::Validation(errors) = err else {
        panic!("expected a validation failure");
    };
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({"pipeline_id": ["The selected pipeline_id is invalid."]})
    );
}

#[tokio::test]
async fn organization_fallback_scopes_references() {
    let validator = ScopedEntityValidator::new(seeded_store().await);
    let resolver = TenantScopeResolver::default();
    // no ids at all: resolves through the organization table to tenant 4
    let globex = Principal::anonymous().with_organization("Globex LLC");
    let scope = resolver.request_scope(None, &globex);

    let own = StoreStageRequest {
        name: Some("Negotiation".to_string()),
        pipeline_id: Some(5),
        probability: Some(60),
    };
    assert!(own.validate(&validator, &scope).await.is_ok());

    let foreign = StoreStageRequest {
        pipeline_id: Some(1),
        ..own.clone()
    };
    assert!(foreign.validate(&validator, &scope).await.is_err());
}

#[tokio::test]
async fn header_tenant_is_what_gets_validated() {
    let validator = ScopedEntityValidator::new(seeded_store().await);
    let resolver = TenantScopeResolver::default();
    let principal = Principal::new(300).with_tenant(ACME_TENANT);

    let request = UpdateStageRequest {
        pipeline_id: Some(5),
        ..Default::default()
    };

    let acme_scope = resolver.request_scope(None, &principal);
    assert!(request.validate(&validator, &acme_scope).await.is_err());

    let globex_scope = resolver.request_scope(Some(4), &principal);
    assert!(request.validate(&validator, &globex_scope).await.is_ok());
}

#[tokio::test]
async fn quote_template_reports_every_bad_field() {
    let validator = ScopedEntityValidator::new(seeded_store().await);
    let resolver = TenantScopeResolver::default();
    let scope = resolver.request_scope(None, &Principal::new(300).with_tenant(ACME_TENANT));

    let request: UpdateQuoteTemplateRequest = parse_request(json!({
        "name": "",
        "pipeline_id": 5,
        "product_ids": [10, 11, 12, 404]
    }))
    .unwrap();

    let err = request.validate(&validator, &scope).await.unwrap_err();
    let errors = err.field_errors().unwrap();
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec!["name", "pipeline_id", "product_ids.1", "product_ids.3"]
    );
}

#[test]
fn malformed_payload_is_not_a_validation_error() {
    let result: Result<UpdateStageRequest, _> = parse_request(json!({"pipeline_id": "two"}));
    let err = result.unwrap_err();
    assert!(matches!(err, ScopeError::Json(_)));
    assert!(err.field_errors().is_none());
}
