//! Assignment candidates as seen by admins and team members.

use crate::common::{ACME_TENANT, GLOBEX_TENANT, seeded_store};
use tenant_scope::storage::InMemoryStore;
use tenant_scope::{
    AssignmentVisibilityFilter, Candidate, CandidateKind, Principal, Role, ScopeConfig,
    TenantResolver, TenantScopeResolver,
};

async fn filter() -> AssignmentVisibilityFilter<InMemoryStore> {
    AssignmentVisibilityFilter::new(seeded_store().await, ScopeConfig::default())
}

async fn visible_ids(
    filter: &AssignmentVisibilityFilter<InMemoryStore>,
    principal: &Principal,
    kind: CandidateKind,
) -> Vec<u64> {
    let scope = TenantScopeResolver::default().request_scope(None, principal);
    let candidates = filter.list_candidates(principal, &scope, kind).await.unwrap();
    ids(&candidates)
}

fn ids(candidates: &[Candidate]) -> Vec<u64> {
    candidates.iter().map(|c| c.id).collect()
}

#[tokio::test]
async fn admin_sees_every_user_in_store_order() {
    let filter = filter().await;
    let admin = Principal::new(300)
        .with_tenant(ACME_TENANT)
        .with_role(Role::Admin);

    assert_eq!(
        visible_ids(&filter, &admin, CandidateKind::Users).await,
        vec![300, 301, 400, 302]
    );
    assert_eq!(
        visible_ids(&filter, &admin, CandidateKind::Teams).await,
        vec![30, 31, 40]
    );
}

#[tokio::test]
async fn member_sees_colleagues_only() {
    let filter = filter().await;
    let ada = Principal::new(300).with_tenant(ACME_TENANT).with_team(30);
    let scope = TenantScopeResolver::default().request_scope(None, &ada);

    let users = filter.list_candidates(&ada, &scope, CandidateKind::Users).await.unwrap();
    // 302 shares team 30 but belongs to the other tenant
    assert_eq!(ids(&users), vec![300]);
    assert_eq!(users[0].name.as_deref(), Some("Ada"));

    assert!(visible_ids(&filter, &ada, CandidateKind::Companies).await.is_empty());
}

#[tokio::test]
async fn shared_team_id_does_not_cross_tenants() {
    let filter = filter().await;
    let acme_member = Principal::new(300).with_tenant(ACME_TENANT).with_team(30);
    let globex_member = Principal::new(302).with_tenant(GLOBEX_TENANT).with_team(30);

    assert_eq!(visible_ids(&filter, &acme_member, CandidateKind::Users).await, vec![300]);
    assert_eq!(visible_ids(&filter, &globex_member, CandidateKind::Users).await, vec![302]);
}

#[tokio::test]
async fn member_of_several_teams_sees_the_union() {
    let filter = filter().await;
    let dmitri = Principal::new(302)
        .with_tenant(GLOBEX_TENANT)
        .with_team(30)
        .with_team(40);

    assert_eq!(
        visible_ids(&filter, &dmitri, CandidateKind::Users).await,
        vec![400, 302]
    );
    assert_eq!(visible_ids(&filter, &dmitri, CandidateKind::Teams).await, vec![40]);
}

#[tokio::test]
async fn admin_capability_without_admin_role() {
    let filter = filter().await;
    let principal = Principal::new(301)
        .with_tenant(ACME_TENANT)
        .with_team(31)
        .with_capability("admin");

    assert_eq!(
        visible_ids(&filter, &principal, CandidateKind::Companies).await,
        vec![700]
    );
    assert_eq!(visible_ids(&filter, &principal, CandidateKind::Users).await.len(), 4);
}

#[tokio::test]
async fn unrecognised_role_is_treated_as_member() {
    let filter = filter().await;
    let guest = Principal::new(900).with_role(Role::Other("guest".to_string()));

    assert!(visible_ids(&filter, &guest, CandidateKind::Users).await.is_empty());
}
