//! # Store Actor
//!
//! In-memory document store for deletion markers. Creating a marker publishes
//! a [`MarkerCreated`] event on the trigger channel, which is how the
//! deletion handler gets invoked.

use super::message::{MarkerCreated, StoreRequest};
use super::StoreError;
use crate::model::{DeletionMarker, MarkerRef};
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    markers: BTreeMap<MarkerRef, DeletionMarker>,
    trigger: Option<mpsc::Sender<MarkerCreated>>,
}

impl StoreActor {
    pub(crate) fn new(
        receiver: mpsc::Receiver<StoreRequest>,
        trigger: Option<mpsc::Sender<MarkerCreated>>,
    ) -> Self {
        Self {
            receiver,
            markers: BTreeMap::new(),
            trigger,
        }
    }

    /// Runs the event loop until a `Shutdown` request arrives or every client
    /// has been dropped.
    ///
    /// The trigger sender is owned by the loop, so the trigger channel closes
    /// exactly when the store shuts down.
    pub async fn run(mut self) {
        info!(actor = "store", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Create { id, respond_to } => {
                    let reference = MarkerRef::new(id);
                    if self.markers.contains_key(&reference) {
                        warn!(path = %reference, "Marker already exists");
                        let _ = respond_to.send(Err(StoreError::AlreadyExists(reference.path())));
                        continue;
                    }
                    let marker = DeletionMarker::new(reference.id(), Utc::now());
                    self.markers.insert(reference.clone(), marker);
                    info!(path = %reference, size = self.markers.len(), "Created");
                    let _ = respond_to.send(Ok(reference.clone()));
                    self.publish(MarkerCreated { reference }).await;
                }
                StoreRequest::Get {
                    reference,
                    respond_to,
                } => {
                    let marker = self.markers.get(&reference).cloned();
                    debug!(path = %reference, found = marker.is_some(), "Get");
                    let _ = respond_to.send(Ok(marker));
                }
                StoreRequest::Update {
                    reference,
                    update,
                    respond_to,
                } => {
                    debug!(path = %reference, ?update, "Update");
                    match self.markers.get_mut(&reference) {
                        Some(marker) => {
                            marker.apply(&update);
                            info!(path = %reference, status = %update.status, "Updated");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(path = %reference, "Not found");
                            let _ = respond_to.send(Err(StoreError::NotFound(reference.path())));
                        }
                    }
                }
                StoreRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.markers.values().cloned().collect()));
                }
                StoreRequest::Redeliver {
                    reference,
                    respond_to,
                } => {
                    if !self.markers.contains_key(&reference) {
                        warn!(path = %reference, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(reference.path())));
                        continue;
                    }
                    info!(path = %reference, "Redelivering creation event");
                    let _ = respond_to.send(Ok(()));
                    self.publish(MarkerCreated { reference }).await;
                }
                StoreRequest::CloseTrigger { respond_to } => {
                    if self.trigger.take().is_some() {
                        info!(actor = "store", "Trigger closed");
                    }
                    let _ = respond_to.send(Ok(()));
                }
                StoreRequest::Shutdown { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                    break;
                }
            }
        }

        info!(actor = "store", size = self.markers.len(), "Shutdown");
    }

    async fn publish(&self, event: MarkerCreated) {
        let Some(trigger) = &self.trigger else {
            return;
        };
        if trigger.send(event).await.is_err() {
            warn!("Trigger channel closed; creation event dropped");
        }
    }
}
