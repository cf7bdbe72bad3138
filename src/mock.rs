//! # Mocks & Testing Guide
//!
//! In-memory doubles for the two service traits, so the deletion handler can
//! be tested without spawning any actor.
//!
//! | | Mocks | Real actors |
//! |---|---|---|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **Error injection** | `return_err` on any call | `AccountClient::fail_next` |
//! | **Use case** | Handler branching | Dispatcher and full system |
//!
//! ## Example
//!
//! ```rust
//! use auth_deletion::handler::DeletionRequestHandler;
//! use auth_deletion::mock::{MockAccountService, MockDocumentStore};
//! use auth_deletion::model::{AccountInfo, DeletionStatus, MarkerRef};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut accounts = MockAccountService::new();
//!     accounts.expect_lookup("abc123").return_ok(AccountInfo::new("abc123"));
//!     accounts.expect_delete("abc123").return_ok();
//!     let store = MockDocumentStore::new();
//!
//!     let handler = DeletionRequestHandler::new(
//!         Arc::new(accounts.clone()),
//!         Arc::new(store.clone()),
//!     );
//!     let update = handler.handle(Some("abc123"), &MarkerRef::new("abc123")).await;
//!
//!     assert_eq!(update.status, DeletionStatus::Success);
//!     accounts.verify();
//! }
//! ```

use crate::account_actor::AccountError;
use crate::clients::{AccountService, DocumentStore};
use crate::model::{AccountInfo, MarkerRef, MarkerUpdate};
use crate::store_actor::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// ACCOUNT SERVICE
// =============================================================================

enum Expectation {
    Lookup {
        uid: String,
        response: Result<AccountInfo, AccountError>,
    },
    Delete {
        uid: String,
        response: Result<(), AccountError>,
    },
}

/// A scripted [`AccountService`].
///
/// Calls must arrive in the order the expectations were registered; any other
/// call panics. Clones share the same script.
#[derive(Clone, Default)]
pub struct MockAccountService {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAccountService {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `lookup` for `uid`.
    pub fn expect_lookup(&mut self, uid: impl Into<String>) -> LookupExpectationBuilder {
        LookupExpectationBuilder {
            uid: uid.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `delete` for `uid`.
    pub fn expect_delete(&mut self, uid: impl Into<String>) -> DeleteExpectationBuilder {
        DeleteExpectationBuilder {
            uid: uid.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Calls received so far, as `"lookup:<uid>"` / `"delete:<uid>"`.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = lock(&self.expectations);
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self, call: &str, uid: &str) -> Expectation {
        lock(&self.calls).push(format!("{call}:{uid}"));
        match lock(&self.expectations).pop_front() {
            Some(exp) => exp,
            None => panic!("Unexpected {call} for {uid}: no expectation left"),
        }
    }
}

#[async_trait]
impl AccountService for MockAccountService {
    async fn lookup(&self, uid: &str) -> Result<AccountInfo, AccountError> {
        match self.next("lookup", uid) {
            Expectation::Lookup {
                uid: expected,
                response,
            } if expected == uid => response,
            _ => panic!("Unexpected lookup for {uid} or expectation mismatch"),
        }
    }

    async fn delete(&self, uid: &str) -> Result<(), AccountError> {
        match self.next("delete", uid) {
            Expectation::Delete {
                uid: expected,
                response,
            } if expected == uid => response,
            _ => panic!("Unexpected delete for {uid} or expectation mismatch"),
        }
    }
}

/// Builder for `lookup` expectations.
pub struct LookupExpectationBuilder {
    uid: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl LookupExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, account: AccountInfo) {
        lock(&self.expectations).push_back(Expectation::Lookup {
            uid: self.uid,
            response: Ok(account),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: AccountError) {
        lock(&self.expectations).push_back(Expectation::Lookup {
            uid: self.uid,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder {
    uid: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl DeleteExpectationBuilder {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        lock(&self.expectations).push_back(Expectation::Delete {
            uid: self.uid,
            response: Ok(()),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: AccountError) {
        lock(&self.expectations).push_back(Expectation::Delete {
            uid: self.uid,
            response: Err(error),
        });
    }
}

// =============================================================================
// DOCUMENT STORE
// =============================================================================

/// A [`DocumentStore`] that records every write.
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    writes: Arc<Mutex<Vec<(MarkerRef, MarkerUpdate)>>>,
    fail_writes: Arc<AtomicBool>,
    clock: Option<DateTime<Utc>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `now()` to a fixed instant.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    /// Makes every subsequent `update` fail.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Successful writes, oldest first.
    pub fn writes(&self) -> Vec<(MarkerRef, MarkerUpdate)> {
        lock(&self.writes).clone()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn update(&self, reference: &MarkerRef, update: MarkerUpdate) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::ActorCommunicationError(
                "store unavailable".to_string(),
            ));
        }
        lock(&self.writes).push((reference.clone(), update));
        Ok(())
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_account_service_with_expectations() {
        let mut mock = MockAccountService::new();
        mock.expect_lookup("u1").return_ok(AccountInfo::new("u1"));
        mock.expect_delete("u1")
            .return_err(AccountError::from_code("u1", "auth/internal-error", "boom"));

        let account = mock.lookup("u1").await.unwrap();
        assert_eq!(account.uid, "u1");
        assert!(mock.delete("u1").await.is_err());

        assert_eq!(mock.calls(), vec!["lookup:u1", "delete:u1"]);
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "expectation mismatch")]
    async fn test_mock_account_service_rejects_wrong_uid() {
        let mut mock = MockAccountService::new();
        mock.expect_lookup("u1").return_ok(AccountInfo::new("u1"));
        let _ = mock.lookup("u2").await;
    }

    #[tokio::test]
    async fn test_mock_store_clock_and_failures() {
        let now = Utc::now();
        let store = MockDocumentStore::new().with_clock(now);
        assert_eq!(store.now(), now);

        store
            .update(&MarkerRef::new("u1"), MarkerUpdate::success(now))
            .await
            .unwrap();
        store.fail_writes();
        assert!(store
            .update(&MarkerRef::new("u1"), MarkerUpdate::success(now))
            .await
            .is_err());
        assert_eq!(store.writes().len(), 1);
    }
}
