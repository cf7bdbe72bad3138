//! # Account Actor
//!
//! In-memory authentication backend. Owns the account table and answers
//! lookup and delete requests one at a time, so no locking is needed.

use super::message::{AccountOp, AccountRequest};
use super::AccountError;
use crate::model::AccountInfo;
use std::collections::{HashMap, VecDeque};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct AccountActor {
    receiver: mpsc::Receiver<AccountRequest>,
    accounts: HashMap<String, AccountInfo>,
    faults: HashMap<(String, AccountOp), VecDeque<AccountError>>,
}

impl AccountActor {
    pub(crate) fn new(receiver: mpsc::Receiver<AccountRequest>) -> Self {
        Self {
            receiver,
            accounts: HashMap::new(),
            faults: HashMap::new(),
        }
    }

    /// Runs the event loop until a `Shutdown` request arrives or every client
    /// has been dropped.
    pub async fn run(mut self) {
        info!(actor = "accounts", "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                AccountRequest::Create {
                    account,
                    respond_to,
                } => {
                    debug!(?account, "Create");
                    if self.accounts.contains_key(&account.uid) {
                        warn!(uid = %account.uid, "Account already exists");
                        let _ = respond_to.send(Err(AccountError::AlreadyExists(account.uid)));
                        continue;
                    }
                    let uid = account.uid.clone();
                    self.accounts.insert(uid.clone(), account);
                    info!(%uid, size = self.accounts.len(), "Created");
                    let _ = respond_to.send(Ok(()));
                }
                AccountRequest::Lookup { uid, respond_to } => {
                    if let Some(err) = self.take_fault(&uid, AccountOp::Lookup) {
                        warn!(%uid, error = %err, "Lookup failed (scripted)");
                        let _ = respond_to.send(Err(err));
                        continue;
                    }
                    let result = self
                        .accounts
                        .get(&uid)
                        .cloned()
                        .ok_or_else(|| AccountError::NotFound(uid.clone()));
                    debug!(%uid, found = result.is_ok(), "Lookup");
                    let _ = respond_to.send(result);
                }
                AccountRequest::Delete { uid, respond_to } => {
                    if let Some(err) = self.take_fault(&uid, AccountOp::Delete) {
                        warn!(%uid, error = %err, "Delete failed (scripted)");
                        let _ = respond_to.send(Err(err));
                        continue;
                    }
                    if self.accounts.remove(&uid).is_some() {
                        info!(%uid, size = self.accounts.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(%uid, "Not found");
                        let _ = respond_to.send(Err(AccountError::NotFound(uid)));
                    }
                }
                AccountRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.accounts.len()));
                }
                AccountRequest::FailNext {
                    uid,
                    op,
                    error,
                    respond_to,
                } => {
                    debug!(%uid, ?op, %error, "Fault scripted");
                    self.faults.entry((uid, op)).or_default().push_back(error);
                    let _ = respond_to.send(Ok(()));
                }
                AccountRequest::Shutdown { respond_to } => {
                    let _ = respond_to.send(Ok(()));
                    break;
                }
            }
        }

        info!(actor = "accounts", size = self.accounts.len(), "Shutdown");
    }

    fn take_fault(&mut self, uid: &str, op: AccountOp) -> Option<AccountError> {
        let key = (uid.to_string(), op);
        let queue = self.faults.get_mut(&key)?;
        let err = queue.pop_front();
        if queue.is_empty() {
            self.faults.remove(&key);
        }
        err
    }
}
