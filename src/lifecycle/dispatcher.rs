//! # Trigger Dispatcher
//!
//! Turns the store's creation events into handler invocations. Every event
//! gets its own task, so markers are processed concurrently and independently
//! of one another.

use crate::handler::DeletionRequestHandler;
use crate::model::{DeletionStatus, MarkerUpdate};
use crate::store_actor::MarkerCreated;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info};

/// Outcome counts for one dispatcher run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub success: usize,
    pub failed: usize,
    pub not_found: usize,
    /// Handler tasks that panicked instead of returning an annotation.
    pub aborted: usize,
}

impl DispatchSummary {
    pub fn handled(&self) -> usize {
        self.success + self.failed + self.not_found + self.aborted
    }

    fn record(&mut self, joined: Result<MarkerUpdate, JoinError>) {
        match joined {
            Ok(update) => match update.status {
                DeletionStatus::Success => self.success += 1,
                DeletionStatus::Failed => self.failed += 1,
                DeletionStatus::NotFound => self.not_found += 1,
            },
            Err(e) => {
                error!(error = %e, "Handler task failed");
                self.aborted += 1;
            }
        }
    }
}

pub struct TriggerDispatcher {
    handler: DeletionRequestHandler,
    events: mpsc::Receiver<MarkerCreated>,
}

impl TriggerDispatcher {
    pub fn new(handler: DeletionRequestHandler, events: mpsc::Receiver<MarkerCreated>) -> Self {
        Self { handler, events }
    }

    /// Dispatches events until the trigger channel closes, then waits for the
    /// in-flight handlers.
    pub async fn run(mut self) -> DispatchSummary {
        info!("Dispatcher started");
        let mut in_flight = JoinSet::new();
        let mut summary = DispatchSummary::default();

        loop {
            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else { break };
                    debug!(path = %event.reference, "Marker created");
                    let handler = self.handler.clone();
                    in_flight.spawn(async move {
                        handler.handle(Some(event.uid()), &event.reference).await
                    });
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    summary.record(joined);
                }
            }
        }

        while let Some(joined) = in_flight.join_next().await {
            summary.record(joined);
        }

        info!(
            handled = summary.handled(),
            success = summary.success,
            failed = summary.failed,
            not_found = summary.not_found,
            "Dispatcher stopped"
        );
        summary
    }
}
