//! Cross-entity business-rule tests
//!
//! Exercises the flows a service layer would drive: tenant and user setup,
//! space creation with event emission, document dedup, and the query
//! lifecycle from submission to event collection.

use domain::{
    Citation, Document, DomainEvent, Email, Query, QueryStatus, Space, SpaceRole, SpaceVisibility,
    Tenant, User, UserId, UserRole,
};

fn admin_for(tenant: &Tenant) -> User {
    User::new(
        tenant.id,
        Email::new("admin@canada.ca").unwrap(),
        "Ada Admin",
        "sub-admin",
        UserId::new(),
    )
    .unwrap()
    .with_role(UserRole::Admin)
}

#[test]
fn space_creation_emits_a_single_space_created_event() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();
    let admin = admin_for(&tenant);
    admin.ensure_same_tenant(&tenant.id).unwrap();

    let mut space = Space::new(tenant.id, "Policy Research", admin.id).unwrap();
    space.emit_space_created().unwrap();

    let events = space.collect_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        DomainEvent::SpaceCreated(e) => {
            assert_eq!(e.space_id, space.id);
            assert_eq!(e.owner_id, admin.id);
            assert_eq!(e.visibility, SpaceVisibility::Private);
            assert_eq!(e.header.tenant_id, tenant.id);
        },
        other => panic!("expected SpaceCreated, got {other:?}"),
    }

    // The buffer was drained; a second collect returns nothing
    assert!(space.collect_events().is_empty());
}

#[test]
fn admin_access_stops_at_the_tenant_boundary() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();
    let other_tenant = Tenant::new("Other", "other", UserId::new()).unwrap();
    let admin = admin_for(&tenant);

    let own_space = Space::new(tenant.id, "Own", admin.id).unwrap();
    let foreign_space = Space::new(other_tenant.id, "Foreign", UserId::new()).unwrap();

    assert!(admin.can_access_space(&own_space.owner_id, &own_space.tenant_id));
    assert!(!admin.can_access_space(&foreign_space.owner_id, &foreign_space.tenant_id));
    assert!(admin.ensure_same_tenant(&other_tenant.id).is_err());
}

#[test]
fn document_upload_flow_with_dedup_and_counters() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();
    let analyst = User::new(
        tenant.id,
        Email::new("analyst@canada.ca").unwrap(),
        "Ann Analyst",
        "sub-analyst",
        UserId::new(),
    )
    .unwrap()
    .with_role(UserRole::Analyst);

    let mut space = Space::new(tenant.id, "Research", analyst.id).unwrap();
    assert!(space.can_add_document(&analyst.id));

    let content = b"policy file bytes";
    let hash = Document::compute_content_hash(content);
    let document = Document::new(
        space.id,
        tenant.id,
        "policy.pdf",
        content.len() as u64,
        hash.clone(),
        "blob://documents/policy.pdf",
        analyst.id,
    )
    .unwrap();

    assert!(document.is_duplicate(&hash));
    assert!(!document.is_duplicate(&Document::compute_content_hash(b"other bytes")));

    space.add_document(&document.id, document.size_bytes);
    space
        .emit_document_added(
            document.id,
            document.filename.clone(),
            document.document_type,
            document.size_bytes,
            analyst.id,
        )
        .unwrap();

    assert_eq!(space.document_count, 1);
    assert_eq!(space.total_size_bytes, content.len() as u64);
    assert_eq!(space.collect_events().len(), 1);
}

#[test]
fn membership_grants_are_pinned_by_events() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();
    let owner = UserId::new();
    let viewer = UserId::new();

    let mut space = Space::new(tenant.id, "Shared Space", owner).unwrap();
    space
        .add_member(domain::SpaceMember::new(viewer, SpaceRole::Viewer, owner))
        .unwrap();
    space.emit_member_added(viewer, SpaceRole::Viewer, owner);

    assert_eq!(space.get_member_role(&viewer), Some(SpaceRole::Viewer));
    assert!(!space.can_add_document(&viewer));

    let events = space.collect_events();
    match &events[0] {
        DomainEvent::MemberAdded(e) => assert_eq!(e.added_by, owner),
        other => panic!("expected MemberAdded, got {other:?}"),
    }
}

#[test]
fn query_lifecycle_from_submission_to_completion_events() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();
    let user_id = UserId::new();
    let space = Space::new(tenant.id, "Research", user_id).unwrap();

    let mut query = Query::new(
        space.id,
        tenant.id,
        "What is the remote work policy?",
        user_id,
    )
    .unwrap();
    query.emit_query_executed().unwrap();

    // Completion events cannot be emitted before the transition
    assert!(query.emit_query_completed().is_err());

    query.mark_as_processing();
    let citation = Citation::new(
        domain::DocumentId::new(),
        "chunk-0",
        "policy.pdf",
        0.87,
        "Remote work is permitted up to three days per week.",
    )
    .unwrap()
    .with_page_number(4);
    query.tokens_used = Some(1500);
    query.mark_as_completed("Up to three days per week.", vec![citation], 2150);

    assert_eq!(query.status, QueryStatus::Completed);
    query.emit_query_completed().unwrap();

    let events = query.collect_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type(), "QueryExecuted");
    assert_eq!(events[1].event_type(), "QueryCompleted");
    match &events[1] {
        DomainEvent::QueryCompleted(e) => {
            assert_eq!(e.citation_count, 1);
            assert_eq!(e.tokens_used, 1500);
            assert_eq!(e.processing_time_ms, 2150);
        },
        other => panic!("expected QueryCompleted, got {other:?}"),
    }
}

#[test]
fn failed_query_emits_failure_event_only_after_transition() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();
    let user_id = UserId::new();
    let space = Space::new(tenant.id, "Research", user_id).unwrap();

    let mut query = Query::new(space.id, tenant.id, "Anything?", user_id).unwrap();
    assert!(query.emit_query_failed().is_err());

    query.mark_as_failed("pipeline timeout after 30s");
    query.emit_query_failed().unwrap();

    let events = query.collect_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].tenant_id(), tenant.id);
}

#[test]
fn quota_checks_gate_resource_creation() {
    let tenant = Tenant::new("Dept", "dept", UserId::new()).unwrap();

    // Caller counts current users before creating another
    assert!(!tenant.is_quota_exceeded("users", 99));
    assert!(tenant.is_quota_exceeded("users", 100));
    assert!(tenant.is_quota_exceeded("spaces", 50));
}
