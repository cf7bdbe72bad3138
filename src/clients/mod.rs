//! Type-safe wrappers around the actors, and the service traits the deletion
//! handler is written against.

pub mod account_client;
pub mod store_client;
pub mod traits;

pub use account_client::AccountClient;
pub use store_client::StoreClient;
pub use traits::{AccountService, DocumentStore};
