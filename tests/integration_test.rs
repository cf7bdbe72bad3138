use auth_deletion::account_actor::{self, AccountError, AccountOp};
use auth_deletion::clients::AccountService;
use auth_deletion::handler::DeletionRequestHandler;
use auth_deletion::lifecycle::{DeletionSystem, SystemConfig};
use auth_deletion::model::{AccountInfo, DeletionStatus, MarkerRef};
use auth_deletion::store_actor::{self, StoreError};
use std::sync::Arc;

/// Full end-to-end run of the scenarios a marker can end in.
#[tokio::test]
async fn test_full_deletion_system_integration() {
    let system = DeletionSystem::new();

    system
        .account_client
        .create_account(AccountInfo::new("abc123").with_email("alice@example.com"))
        .await
        .expect("Failed to create account");

    // Account exists and is deleted.
    let reference = system
        .store_client
        .create_marker("abc123")
        .await
        .expect("Failed to create marker");
    let marker = system
        .wait_for_annotation(&reference)
        .await
        .expect("Marker never annotated");
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::Success));
    assert_eq!(marker.auth_deletion_error, None);
    assert!(marker.auth_deletion_at.is_some());
    assert!(system
        .account_client
        .lookup("abc123")
        .await
        .unwrap_err()
        .is_not_found());

    // Account never existed.
    let reference = system.store_client.create_marker("ghost").await.unwrap();
    let marker = system.wait_for_annotation(&reference).await.unwrap();
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::NotFound));
    assert_eq!(
        marker.auth_deletion_error.as_deref(),
        Some("Auth user not found")
    );

    // Empty uid.
    let reference = system.store_client.create_marker("").await.unwrap();
    let marker = system.wait_for_annotation(&reference).await.unwrap();
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::Failed));
    assert_eq!(marker.auth_deletion_error.as_deref(), Some("Missing UID"));

    let report = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(report.summary.success, 1);
    assert_eq!(report.summary.not_found, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.markers.len(), 3);
    assert!(report.markers.iter().all(|m| !m.is_pending()));
}

/// Lookup hiccup followed by a successful delete, and a delete that is refused.
#[tokio::test]
async fn test_scripted_backend_failures() {
    let system = DeletionSystem::new();
    let accounts = &system.account_client;

    accounts.create_account(AccountInfo::new("abc123")).await.unwrap();
    accounts.create_account(AccountInfo::new("locked")).await.unwrap();
    accounts
        .fail_next(
            "abc123",
            AccountOp::Lookup,
            AccountError::from_code("abc123", "auth/internal-error", "lookup timed out"),
        )
        .await
        .unwrap();
    accounts
        .fail_next(
            "locked",
            AccountOp::Delete,
            AccountError::from_code("locked", "auth/insufficient-permission", "denied"),
        )
        .await
        .unwrap();

    let reference = system.store_client.create_marker("abc123").await.unwrap();
    let marker = system.wait_for_annotation(&reference).await.unwrap();
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::Success));

    let reference = system.store_client.create_marker("locked").await.unwrap();
    let marker = system.wait_for_annotation(&reference).await.unwrap();
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::Failed));
    assert_eq!(
        marker.auth_deletion_error.as_deref(),
        Some("auth/insufficient-permission: denied")
    );

    // The refused account is still there for a later manual retry.
    assert_eq!(accounts.count().await.unwrap(), 1);

    system.shutdown().await.unwrap();
}

/// A duplicate delivery of the same marker resolves to `not_found`.
#[tokio::test]
async fn test_duplicate_trigger_is_idempotent() {
    let system = DeletionSystem::new();
    system
        .account_client
        .create_account(AccountInfo::new("abc123"))
        .await
        .unwrap();

    let reference = system.store_client.create_marker("abc123").await.unwrap();
    let first = system.wait_for_annotation(&reference).await.unwrap();
    assert_eq!(first.auth_deletion_status, Some(DeletionStatus::Success));

    system.store_client.redeliver(&reference).await.unwrap();

    // Shutdown drains the redelivered event before collecting the markers.
    let report = system.shutdown().await.unwrap();
    assert_eq!(report.summary.success, 1);
    assert_eq!(report.summary.not_found, 1);

    let marker = report.marker("abc123").expect("marker kept");
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::NotFound));
    assert!(marker.auth_deletion_at >= first.auth_deletion_at);
}

/// Markers are handled independently; many at once all reach a terminal state.
#[tokio::test]
async fn test_concurrent_markers() {
    let system = DeletionSystem::with_config(SystemConfig {
        trigger_buffer: 4,
        ..SystemConfig::default()
    });

    for i in 0..20 {
        system
            .account_client
            .create_account(AccountInfo::new(format!("user_{i}")))
            .await
            .unwrap();
    }

    let mut handles = vec![];
    for i in 0..30 {
        let store = system.store_client.clone();
        handles.push(tokio::spawn(async move {
            store.create_marker(&format!("user_{i}")).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("Failed to create marker");
    }

    let report = system.shutdown().await.unwrap();
    assert_eq!(report.summary.handled(), 30);
    assert_eq!(report.summary.success, 20);
    assert_eq!(report.summary.not_found, 10);
    assert_eq!(report.summary.aborted, 0);
    assert!(report.markers.iter().all(|m| !m.is_pending()));
}

/// Pattern 2: the handler against real actors, with no dispatcher.
#[tokio::test]
async fn test_handler_with_real_actors() {
    let (account_actor, accounts) = account_actor::new(8);
    let (store_actor, store) = store_actor::new(8);
    let account_handle = tokio::spawn(account_actor.run());
    let store_handle = tokio::spawn(store_actor.run());

    accounts.create_account(AccountInfo::new("abc123")).await.unwrap();
    let reference = store.create_marker("abc123").await.unwrap();

    let handler = DeletionRequestHandler::new(Arc::new(accounts.clone()), Arc::new(store.clone()));
    let update = handler.handle(Some("abc123"), &reference).await;
    assert_eq!(update.status, DeletionStatus::Success);

    let marker = store.get(&reference).await.unwrap().unwrap();
    assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::Success));
    assert_eq!(marker.auth_deletion_at, Some(update.at));

    // A marker that was never created cannot be annotated, but the handler
    // still returns normally.
    let orphan = MarkerRef::new("orphan");
    let update = handler.handle(Some("orphan"), &orphan).await;
    assert_eq!(update.status, DeletionStatus::NotFound);
    assert_eq!(store.get(&orphan).await.unwrap(), None);

    // Creating the same marker twice is rejected by the store.
    assert_eq!(
        store.create_marker("abc123").await,
        Err(StoreError::AlreadyExists("deletedUsers/abc123".to_string()))
    );

    drop(handler);
    drop(accounts);
    drop(store);
    account_handle.await.unwrap();
    store_handle.await.unwrap();
}

/// An explicit shutdown stops the actors even while other clients are alive.
#[tokio::test]
async fn test_actor_shutdown_with_live_clients() {
    let (account_actor, accounts) = account_actor::new(8);
    let (store_actor, store) = store_actor::new(8);
    let account_handle = tokio::spawn(account_actor.run());
    let store_handle = tokio::spawn(store_actor.run());

    let held_accounts = accounts.clone();
    let held_store = store.clone();

    accounts.shutdown().await.unwrap();
    store.shutdown().await.unwrap();
    account_handle.await.unwrap();
    store_handle.await.unwrap();

    assert!(matches!(
        held_accounts.lookup("abc123").await,
        Err(AccountError::ActorCommunicationError(_))
    ));
    assert!(matches!(
        held_store.list().await,
        Err(StoreError::ActorCommunicationError(_))
    ));
}
