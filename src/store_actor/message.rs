//! Messages exchanged with the [`StoreActor`](super::StoreActor), plus the
//! creation event it emits.

use super::StoreError;
use crate::model::{DeletionMarker, MarkerRef, MarkerUpdate};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest {
    Create {
        id: String,
        respond_to: Response<MarkerRef>,
    },
    Get {
        reference: MarkerRef,
        respond_to: Response<Option<DeletionMarker>>,
    },
    Update {
        reference: MarkerRef,
        update: MarkerUpdate,
        respond_to: Response<()>,
    },
    List {
        respond_to: Response<Vec<DeletionMarker>>,
    },
    /// Publishes the creation event of an existing marker again, the way an
    /// at-least-once trigger may.
    Redeliver {
        reference: MarkerRef,
        respond_to: Response<()>,
    },
    /// Drops the trigger sender so the dispatcher can drain and stop.
    CloseTrigger { respond_to: Response<()> },
    /// Stops the event loop even while other clients are still alive.
    Shutdown { respond_to: Response<()> },
}

/// Emitted once for every marker the store creates.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCreated {
    pub reference: MarkerRef,
}

impl MarkerCreated {
    /// The account uid the marker asks to delete (the document id).
    pub fn uid(&self) -> &str {
        self.reference.id()
    }
}
