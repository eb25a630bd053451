//! Tenant isolation across every in-memory store
//!
//! Populates each store with two tenants and checks that no tenant-scoped
//! finder ever returns the other tenant's entities.

use application::ports::{
    ConversationRepository, DocumentRepository, QueryRepository, SpaceRepository, UserRepository,
};
use domain::{
    Conversation, Document, Email, Query, Space, SpaceId, SpaceMember, SpaceRole, TenantId, User,
    UserId,
};
use infrastructure::{
    InMemoryConversationRepository, InMemoryDocumentRepository, InMemoryQueryRepository,
    InMemorySpaceRepository, InMemoryUserRepository,
};

struct TenantFixture {
    tenant_id: TenantId,
    user_id: UserId,
    space_id: SpaceId,
}

fn fixture() -> TenantFixture {
    TenantFixture {
        tenant_id: TenantId::new(),
        user_id: UserId::new(),
        space_id: SpaceId::new(),
    }
}

#[tokio::test]
async fn users_never_leak_across_tenants() {
    let repo = InMemoryUserRepository::new();
    let a = fixture();
    let b = fixture();

    for (i, f) in [&a, &b, &b].iter().enumerate() {
        let user = User::new(
            f.tenant_id,
            Email::new(format!("user{i}@canada.ca")).unwrap(),
            "Some User",
            format!("sub-{i}"),
            UserId::new(),
        )
        .unwrap();
        repo.save(&user).await.unwrap();
    }

    let listed_a = repo.list_by_tenant(&a.tenant_id, 0, 100).await.unwrap();
    let listed_b = repo.list_by_tenant(&b.tenant_id, 0, 100).await.unwrap();

    assert_eq!(listed_a.len(), 1);
    assert_eq!(listed_b.len(), 2);
    assert!(listed_a.iter().all(|u| u.tenant_id == a.tenant_id));
    assert!(listed_b.iter().all(|u| u.tenant_id == b.tenant_id));
}

#[tokio::test]
async fn spaces_never_leak_across_tenants() {
    let repo = InMemorySpaceRepository::new();
    let a = fixture();
    let b = fixture();
    let shared_member = UserId::new();

    let mut space_a = Space::new(a.tenant_id, "A Space", a.user_id).unwrap();
    space_a
        .add_member(SpaceMember::new(shared_member, SpaceRole::Viewer, a.user_id))
        .unwrap();
    repo.save(&space_a).await.unwrap();

    let mut space_b = Space::new(b.tenant_id, "B Space", b.user_id).unwrap();
    space_b
        .add_member(SpaceMember::new(shared_member, SpaceRole::Viewer, b.user_id))
        .unwrap();
    repo.save(&space_b).await.unwrap();

    for spaces in [
        repo.list_by_tenant(&a.tenant_id, 0, 100).await.unwrap(),
        repo.list_by_owner(&a.user_id, &a.tenant_id, 0, 100)
            .await
            .unwrap(),
        repo.list_by_member(&shared_member, &a.tenant_id, 0, 100)
            .await
            .unwrap(),
    ] {
        assert_eq!(spaces.len(), 1);
        assert!(spaces.iter().all(|s| s.tenant_id == a.tenant_id));
    }
}

#[tokio::test]
async fn documents_never_leak_across_tenants() {
    let repo = InMemoryDocumentRepository::new();
    let a = fixture();
    let b = fixture();

    // Identical bytes in both tenants: dedup must stay within the tenant
    let bytes = b"identical content";
    for f in [&a, &b] {
        let doc = Document::new(
            f.space_id,
            f.tenant_id,
            "report.pdf",
            bytes.len() as u64,
            Document::compute_content_hash(bytes),
            "blob://documents/report.pdf",
            f.user_id,
        )
        .unwrap();
        repo.save(&doc).await.unwrap();
    }

    let hash = Document::compute_content_hash(bytes);
    let dedup_hit = repo
        .get_by_content_hash(&hash, &a.tenant_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dedup_hit.tenant_id, a.tenant_id);

    let pending = repo.list_pending_indexing(&a.tenant_id, 100).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].tenant_id, a.tenant_id);

    let by_space = repo
        .list_by_space(&a.space_id, &a.tenant_id, 0, 100)
        .await
        .unwrap();
    assert!(by_space.iter().all(|d| d.tenant_id == a.tenant_id));
}

#[tokio::test]
async fn conversations_never_leak_across_tenants() {
    let repo = InMemoryConversationRepository::new();
    let a = fixture();
    let b = fixture();

    for f in [&a, &b] {
        let conv = Conversation::new(f.space_id, f.tenant_id, "Thread", f.user_id).unwrap();
        repo.save(&conv).await.unwrap();
    }

    let listed = repo
        .list_by_user(&a.user_id, &a.tenant_id, 0, 100)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].tenant_id, a.tenant_id);
}

#[tokio::test]
async fn queries_never_leak_across_tenants() {
    let repo = InMemoryQueryRepository::new();
    let a = fixture();
    let b = fixture();

    for f in [&a, &b] {
        let query = Query::new(f.space_id, f.tenant_id, "A question?", f.user_id).unwrap();
        repo.save(&query).await.unwrap();
    }

    for queries in [
        repo.list_by_space(&a.space_id, &a.tenant_id, 0, 100)
            .await
            .unwrap(),
        repo.list_by_user(&a.user_id, &a.tenant_id, 0, 100)
            .await
            .unwrap(),
    ] {
        assert_eq!(queries.len(), 1);
        assert!(queries.iter().all(|q| q.tenant_id == a.tenant_id));
    }
}
