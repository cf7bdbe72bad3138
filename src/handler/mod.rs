//! # Deletion Request Handler
//!
//! Serves one marker-creation event: delete the account named by the marker
//! and annotate the marker with the outcome.
//!
//! ## Flow
//!
//! 1. Empty or absent uid → `failed` / `Missing UID`.
//! 2. Lookup the account.
//!    - not found → `not_found` / `Auth user not found`, no delete call.
//!    - any other error → logged, and the delete is attempted anyway.
//! 3. Delete the account → `success`, or `failed` with the error text.
//!
//! Exactly one marker write follows, stamped with the store's `now()`. The
//! handler never returns an error: a failed write is logged and dropped.
//!
//! Re-running on a marker whose account is already gone lands in the
//! `not_found` branch, which is what makes duplicate triggers harmless.

pub mod error;

pub use error::DeletionError;

use crate::account_actor::AccountErrorKind;
use crate::clients::{AccountService, DocumentStore};
use crate::model::{DeletionStatus, MarkerRef, MarkerUpdate};
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument};

/// Handler invoked for every newly created deletion marker.
#[derive(Clone)]
pub struct DeletionRequestHandler {
    accounts: Arc<dyn AccountService>,
    store: Arc<dyn DocumentStore>,
}

impl DeletionRequestHandler {
    pub fn new(accounts: Arc<dyn AccountService>, store: Arc<dyn DocumentStore>) -> Self {
        Self { accounts, store }
    }

    /// Processes one marker and returns the annotation written onto it.
    pub async fn handle(&self, uid: Option<&str>, reference: &MarkerRef) -> MarkerUpdate {
        let span = info_span!("delete_account", uid = uid.unwrap_or_default());
        async {
            let result = self.delete_account(uid).await;
            let update = self.annotation(result);
            self.write(reference, update.clone()).await;
            update
        }
        .instrument(span)
        .await
    }

    async fn delete_account(&self, uid: Option<&str>) -> Result<(), DeletionError> {
        let uid = match uid {
            Some(uid) if !uid.is_empty() => uid,
            _ => return Err(DeletionError::MissingInput),
        };

        match self.accounts.lookup(uid).await {
            Ok(account) => debug!(?account, "Account found"),
            Err(e) => match e.kind() {
                AccountErrorKind::NotFound => return Err(DeletionError::AccountNotFound),
                AccountErrorKind::Other => {
                    let err = DeletionError::AccountLookupAmbiguous(e);
                    warn!(error = %err, "Proceeding with delete");
                }
            },
        }

        self.accounts
            .delete(uid)
            .await
            .map_err(DeletionError::DeletionFailed)
    }

    fn annotation(&self, result: Result<(), DeletionError>) -> MarkerUpdate {
        let at = self.store.now();
        match result {
            Ok(()) => {
                info!("Account deleted");
                MarkerUpdate::success(at)
            }
            Err(e) => match e.status() {
                DeletionStatus::NotFound => {
                    info!("Account already gone");
                    MarkerUpdate::not_found(at)
                }
                DeletionStatus::Success | DeletionStatus::Failed => {
                    warn!(error = %e, "Account deletion failed");
                    MarkerUpdate::failed(e.to_string(), at)
                }
            },
        }
    }

    async fn write(&self, reference: &MarkerRef, update: MarkerUpdate) {
        let status = update.status;
        if let Err(e) = self.store.update(reference, update).await {
            error!(path = %reference, %status, error = %e, "Failed to annotate marker");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account_actor::AccountError;
    use crate::mock::{MockAccountService, MockDocumentStore};
    use crate::model::DeletionStatus;

    fn handler(accounts: &MockAccountService, store: &MockDocumentStore) -> DeletionRequestHandler {
        DeletionRequestHandler::new(Arc::new(accounts.clone()), Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn absent_uid_is_missing_input() {
        let accounts = MockAccountService::new();
        let store = MockDocumentStore::new();

        let update = handler(&accounts, &store)
            .handle(None, &MarkerRef::new(""))
            .await;

        assert_eq!(update.status, DeletionStatus::Failed);
        assert_eq!(update.error.as_deref(), Some("Missing UID"));
        assert_eq!(store.writes().len(), 1);
        accounts.verify();
    }

    #[tokio::test]
    async fn failed_write_is_swallowed() {
        let mut accounts = MockAccountService::new();
        accounts.expect_lookup("abc123").return_err(AccountError::NotFound("abc123".into()));
        let store = MockDocumentStore::new();
        store.fail_writes();

        let update = handler(&accounts, &store)
            .handle(Some("abc123"), &MarkerRef::new("abc123"))
            .await;

        assert_eq!(update.status, DeletionStatus::NotFound);
        assert!(store.writes().is_empty());
        accounts.verify();
    }
}
