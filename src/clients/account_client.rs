//! # Account Client
//!
//! Provides a high-level API for interacting with the `Account` actor and
//! implements [`AccountService`] on top of it.
use crate::account_actor::message::{AccountOp, AccountRequest, Response};
use crate::account_actor::AccountError;
use crate::clients::AccountService;
use crate::model::AccountInfo;
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the Account actor. Cheap to clone.
#[derive(Clone)]
pub struct AccountClient {
    sender: mpsc::Sender<AccountRequest>,
}

impl AccountClient {
    pub fn new(sender: mpsc::Sender<AccountRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        build: impl FnOnce(Response<T>) -> AccountRequest,
    ) -> Result<T, AccountError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| AccountError::ActorCommunicationError("Actor closed".to_string()))?;
        response.await.map_err(|_| {
            AccountError::ActorCommunicationError("Actor dropped response channel".to_string())
        })?
    }

    #[instrument(skip(self, account), fields(uid = %account.uid))]
    pub async fn create_account(&self, account: AccountInfo) -> Result<(), AccountError> {
        debug!("Sending request");
        self.call(|respond_to| AccountRequest::Create {
            account,
            respond_to,
        })
        .await
    }

    pub async fn count(&self) -> Result<usize, AccountError> {
        self.call(|respond_to| AccountRequest::Count { respond_to })
            .await
    }

    /// Makes the next `op` call for `uid` fail with `error`.
    #[instrument(skip(self))]
    pub async fn fail_next(
        &self,
        uid: &str,
        op: AccountOp,
        error: AccountError,
    ) -> Result<(), AccountError> {
        let uid = uid.to_string();
        self.call(|respond_to| AccountRequest::FailNext {
            uid,
            op,
            error,
            respond_to,
        })
        .await
    }

    /// Stops the actor. Calls made afterwards fail with
    /// [`AccountError::ActorCommunicationError`].
    pub async fn shutdown(&self) -> Result<(), AccountError> {
        self.call(|respond_to| AccountRequest::Shutdown { respond_to })
            .await
    }
}

#[async_trait]
impl AccountService for AccountClient {
    #[instrument(skip(self))]
    async fn lookup(&self, uid: &str) -> Result<AccountInfo, AccountError> {
        debug!("Sending request");
        let uid = uid.to_string();
        self.call(|respond_to| AccountRequest::Lookup { uid, respond_to })
            .await
    }

    #[instrument(skip(self))]
    async fn delete(&self, uid: &str) -> Result<(), AccountError> {
        debug!("Sending request");
        let uid = uid.to_string();
        self.call(|respond_to| AccountRequest::Delete { uid, respond_to })
            .await
    }
}
