//! # Store Actor
//!
//! In-memory document store holding [`DeletionMarker`](crate::model::DeletionMarker)
//! records under `deletedUsers/{uid}`.
//!
//! - [`new()`] builds a store without a trigger, handy for handler tests.
//! - [`with_trigger()`] also returns the receiver of [`MarkerCreated`] events,
//!   which [`TriggerDispatcher`](crate::lifecycle::TriggerDispatcher) consumes.

pub mod actor;
pub mod error;
pub mod message;

pub use actor::StoreActor;
pub use error::*;
pub use message::MarkerCreated;

use crate::clients::StoreClient;
use tokio::sync::mpsc;

/// Creates a new Store actor and its client, with no creation trigger.
pub fn new(buffer_size: usize) -> (StoreActor, StoreClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreActor::new(receiver, None), StoreClient::new(sender))
}

/// Creates a new Store actor, its client, and the trigger event receiver.
pub fn with_trigger(
    buffer_size: usize,
    trigger_buffer: usize,
) -> (StoreActor, StoreClient, mpsc::Receiver<MarkerCreated>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    let (trigger_tx, trigger_rx) = mpsc::channel(trigger_buffer);
    (
        StoreActor::new(receiver, Some(trigger_tx)),
        StoreClient::new(sender),
        trigger_rx,
    )
}
