use auth_deletion::lifecycle::Platform;
use auth_deletion::mock::{MockAccountService, MockDocumentStore};
use auth_deletion::model::{DeletionStatus, MarkerRef};
use std::sync::Arc;

/// Kept alone in this test binary: the platform is a process-wide singleton.
#[tokio::test]
async fn test_platform_init_is_idempotent() {
    assert!(Platform::get().is_none());

    let first_store = MockDocumentStore::new();
    let first = Platform::init(
        Arc::new(MockAccountService::new()),
        Arc::new(first_store.clone()),
    );

    let second_store = MockDocumentStore::new();
    let second = Platform::init(
        Arc::new(MockAccountService::new()),
        Arc::new(second_store.clone()),
    );
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, Platform::get().unwrap()));

    // The handler is wired to the first call's collaborators.
    let update = second.handler().handle(None, &MarkerRef::new("")).await;
    assert_eq!(update.status, DeletionStatus::Failed);
    assert_eq!(first_store.writes().len(), 1);
    assert!(second_store.writes().is_empty());
}
