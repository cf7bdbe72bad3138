//! # Auth Deletion
//!
//! Deletes accounts from an authentication backend in reaction to deletion
//! markers appearing in a document store, and records the outcome on the
//! marker.
//!
//! A marker is a document `deletedUsers/{uid}`. Once handled it carries:
//!
//! | field | value |
//! |---|---|
//! | `authDeletionStatus` | `success`, `failed` or `not_found` |
//! | `authDeletionError` | reason, only for `failed` / `not_found` |
//! | `authDeletionAt` | server timestamp of the write |
//!
//! ## Module Tour
//!
//! - [`handler`] - [`DeletionRequestHandler`](handler::DeletionRequestHandler), the
//!   per-marker logic and its error taxonomy
//! - [`model`] - markers, annotations and account records
//! - [`clients`] - the [`AccountService`](clients::AccountService) and
//!   [`DocumentStore`](clients::DocumentStore) seams, plus actor clients
//! - [`account_actor`] / [`store_actor`] - in-memory backends run as actors
//! - [`lifecycle`] - wiring, dispatching, shutdown, tracing
//! - [`mock`] - scripted doubles for tests

pub mod account_actor;
pub mod clients;
pub mod handler;
pub mod lifecycle;
pub mod mock;
pub mod model;
pub mod store_actor;
