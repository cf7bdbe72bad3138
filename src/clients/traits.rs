//! # Service Traits
//!
//! The two seams the deletion handler depends on. The in-memory actors
//! implement them through their clients; tests swap in the types from
//! [`crate::mock`].

use crate::account_actor::AccountError;
use crate::model::{AccountInfo, MarkerRef, MarkerUpdate};
use crate::store_actor::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The authentication backend.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Fetches the account for `uid`.
    ///
    /// A missing account is reported as an error whose
    /// [`kind()`](AccountError::kind) is `NotFound`.
    async fn lookup(&self, uid: &str) -> Result<AccountInfo, AccountError>;

    /// Deletes the account for `uid`.
    async fn delete(&self, uid: &str) -> Result<(), AccountError>;
}

/// The document store holding deletion markers.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Merges `update` into the referenced document.
    async fn update(&self, reference: &MarkerRef, update: MarkerUpdate) -> Result<(), StoreError>;

    /// Server-assigned timestamp for the next write.
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
