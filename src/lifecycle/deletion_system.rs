use crate::account_actor;
use crate::clients::{AccountClient, StoreClient};
use crate::handler::DeletionRequestHandler;
use crate::lifecycle::{DispatchSummary, SystemConfig, TriggerDispatcher};
use crate::model::{DeletionMarker, MarkerRef};
use crate::store_actor::{self, StoreError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// What the system looked like when it stopped.
#[derive(Debug, Clone)]
pub struct ShutdownReport {
    pub summary: DispatchSummary,
    /// Every marker in the store after the last handler finished.
    pub markers: Vec<DeletionMarker>,
}

impl ShutdownReport {
    pub fn marker(&self, uid: &str) -> Option<&DeletionMarker> {
        self.markers.iter().find(|m| m.id == uid)
    }
}

/// The runtime orchestrator: account actor, store actor and trigger
/// dispatcher, wired together.
///
/// Creating a marker through [`store_client`](Self::store_client) fires the
/// handler for that marker.
///
/// # Example
///
/// ```rust
/// use auth_deletion::lifecycle::DeletionSystem;
/// use auth_deletion::model::{AccountInfo, DeletionStatus};
///
/// #[tokio::main]
/// async fn main() {
///     let system = DeletionSystem::new();
///     system.account_client.create_account(AccountInfo::new("abc123")).await.unwrap();
///
///     let reference = system.store_client.create_marker("abc123").await.unwrap();
///     let marker = system.wait_for_annotation(&reference).await.unwrap();
///     assert_eq!(marker.auth_deletion_status, Some(DeletionStatus::Success));
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct DeletionSystem {
    /// Client for the authentication backend.
    pub account_client: AccountClient,

    /// Client for the marker store.
    pub store_client: StoreClient,

    dispatcher: tokio::task::JoinHandle<DispatchSummary>,

    /// Task handles for the actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeletionSystem {
    pub fn new() -> Self {
        Self::with_config(SystemConfig::default())
    }

    /// Spawns the actors and the dispatcher.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: SystemConfig) -> Self {
        let (account_actor, account_client) = account_actor::new(config.account_buffer);
        let (store_actor, store_client, events) =
            store_actor::with_trigger(config.store_buffer, config.trigger_buffer);

        let account_handle = tokio::spawn(account_actor.run());
        let store_handle = tokio::spawn(store_actor.run());

        let handler = DeletionRequestHandler::new(
            Arc::new(account_client.clone()),
            Arc::new(store_client.clone()),
        );
        let dispatcher = tokio::spawn(TriggerDispatcher::new(handler, events).run());

        info!(?config, "Deletion system started");
        Self {
            account_client,
            store_client,
            dispatcher,
            handles: vec![account_handle, store_handle],
        }
    }

    /// Waits until the referenced marker carries an annotation.
    pub async fn wait_for_annotation(
        &self,
        reference: &MarkerRef,
    ) -> Result<DeletionMarker, StoreError> {
        loop {
            match self.store_client.get(reference).await? {
                Some(marker) if !marker.is_pending() => return Ok(marker),
                Some(_) => tokio::time::sleep(POLL_INTERVAL).await,
                None => return Err(StoreError::NotFound(reference.path())),
            }
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Clients of both actors outlive the system (the dispatcher's handler,
    /// a [`Platform`](crate::lifecycle::Platform) handler, user clones), so
    /// dropping ours would never end the actor loops. Instead:
    /// 1. The store closes its trigger, which lets the dispatcher drain the
    ///    queued events and in-flight handlers, then exit.
    /// 2. The final marker state is collected.
    /// 3. Both actors get an explicit `Shutdown` and their tasks are awaited.
    ///    Clients still held elsewhere get `ActorCommunicationError` from then on.
    pub async fn shutdown(self) -> Result<ShutdownReport, String> {
        info!("Shutting down system...");

        self.store_client
            .close_trigger()
            .await
            .map_err(|e| e.to_string())?;

        let summary = self.dispatcher.await.map_err(|e| {
            error!("Dispatcher task failed: {:?}", e);
            format!("Dispatcher task failed: {:?}", e)
        })?;

        let markers = self.store_client.list().await.map_err(|e| e.to_string())?;

        self.account_client
            .shutdown()
            .await
            .map_err(|e| e.to_string())?;
        self.store_client
            .shutdown()
            .await
            .map_err(|e| e.to_string())?;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!(handled = summary.handled(), "System shutdown complete.");
        Ok(ShutdownReport { summary, markers })
    }
}

impl Default for DeletionSystem {
    fn default() -> Self {
        Self::new()
    }
}
