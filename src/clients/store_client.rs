//! # Store Client
//!
//! Provides a high-level API for interacting with the `Store` actor and
//! implements [`DocumentStore`] on top of it.
use crate::clients::DocumentStore;
use crate::model::{DeletionMarker, MarkerRef, MarkerUpdate};
use crate::store_actor::message::{Response, StoreRequest};
use crate::store_actor::StoreError;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Store actor. Cheap to clone.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        build: impl FnOnce(Response<T>) -> StoreRequest,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorCommunicationError("Actor closed".to_string()))?;
        response.await.map_err(|_| {
            StoreError::ActorCommunicationError("Actor dropped response channel".to_string())
        })?
    }

    /// Creates the marker `deletedUsers/{uid}`, which fires the trigger.
    #[instrument(skip(self))]
    pub async fn create_marker(&self, uid: &str) -> Result<MarkerRef, StoreError> {
        debug!("Sending request");
        let id = uid.to_string();
        self.call(|respond_to| StoreRequest::Create { id, respond_to })
            .await
    }

    #[instrument(skip(self), fields(path = %reference))]
    pub async fn get(&self, reference: &MarkerRef) -> Result<Option<DeletionMarker>, StoreError> {
        let reference = reference.clone();
        self.call(|respond_to| StoreRequest::Get {
            reference,
            respond_to,
        })
        .await
    }

    pub async fn list(&self) -> Result<Vec<DeletionMarker>, StoreError> {
        self.call(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    /// Fires the creation trigger of an existing marker a second time.
    #[instrument(skip(self), fields(path = %reference))]
    pub async fn redeliver(&self, reference: &MarkerRef) -> Result<(), StoreError> {
        let reference = reference.clone();
        self.call(|respond_to| StoreRequest::Redeliver {
            reference,
            respond_to,
        })
        .await
    }

    /// Stops the store from publishing creation events.
    pub async fn close_trigger(&self) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::CloseTrigger { respond_to })
            .await
    }

    /// Stops the actor. Calls made afterwards fail with
    /// [`StoreError::ActorCommunicationError`].
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        self.call(|respond_to| StoreRequest::Shutdown { respond_to })
            .await
    }
}

#[async_trait]
impl DocumentStore for StoreClient {
    #[instrument(skip(self, update), fields(path = %reference))]
    async fn update(&self, reference: &MarkerRef, update: MarkerUpdate) -> Result<(), StoreError> {
        debug!("Sending request");
        let reference = reference.clone();
        self.call(|respond_to| StoreRequest::Update {
            reference,
            update,
            respond_to,
        })
        .await
    }
}
