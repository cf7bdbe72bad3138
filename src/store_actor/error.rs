//! Error types for the Store actor.

use thiserror::Error;

/// Errors that can occur during document store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The referenced document does not exist.
    #[error("No document to update: {0}")]
    NotFound(String),

    /// A document with the same path already exists.
    #[error("Document already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
