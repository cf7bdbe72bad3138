//! # Account Actor
//!
//! In-memory stand-in for the authentication backend the deletion handler
//! talks to.
//!
//! ## Structure
//!
//! - [`actor`] - [`AccountActor`], the task owning the account table
//! - [`message`] - request enum and response alias
//! - [`error`] - [`AccountError`] and its [`AccountErrorKind`] classification
//! - [`new()`] - factory returning the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use auth_deletion::account_actor;
//! use auth_deletion::clients::AccountService;
//! use auth_deletion::model::AccountInfo;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = account_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     client.create_account(AccountInfo::new("abc123")).await.unwrap();
//!     client.delete("abc123").await.unwrap();
//!     assert!(client.lookup("abc123").await.unwrap_err().is_not_found());
//! }
//! ```

pub mod actor;
pub mod error;
pub mod message;

pub use actor::AccountActor;
pub use error::*;
pub use message::AccountOp;

use crate::clients::AccountClient;
use tokio::sync::mpsc;

/// Creates a new Account actor and its client.
pub fn new(buffer_size: usize) -> (AccountActor, AccountClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (AccountActor::new(receiver), AccountClient::new(sender))
}
