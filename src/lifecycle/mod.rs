//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the pieces around the deletion handler.
//!
//! ```text
//!  StoreClient::create_marker
//!          │
//!          ▼
//!     StoreActor ──MarkerCreated──► TriggerDispatcher ──spawn──► DeletionRequestHandler
//!          ▲                                                        │        │
//!          └──────────────── update(marker) ────────────────────────┘        │
//!                                                   AccountActor ◄─ lookup / delete
//! ```
//!
//! - [`DeletionSystem`] - spawns the actors and the dispatcher, and shuts
//!   them down in an order that lets in-flight handlers finish
//! - [`TriggerDispatcher`] - one task per creation event
//! - [`Platform`] - process-wide singleton with idempotent `init`
//! - [`SystemConfig`] - channel capacities
//! - [`setup_tracing`] - logging bootstrap, see the [`tracing`](self::tracing) module

pub mod config;
pub mod deletion_system;
pub mod dispatcher;
pub mod platform;
pub mod tracing;

pub use config::SystemConfig;
pub use deletion_system::*;
pub use dispatcher::*;
pub use platform::Platform;
pub use self::tracing::setup_tracing;
