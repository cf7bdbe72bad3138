//! Process-wide platform handle.
//!
//! Hosting runtimes may load the deletion module more than once per process,
//! so initialization is idempotent: the first [`Platform::init`] wins and
//! every later call hands back that same instance.

use crate::clients::{AccountService, DocumentStore};
use crate::handler::DeletionRequestHandler;
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info};

static PLATFORM: OnceCell<Platform> = OnceCell::new();

pub struct Platform {
    handler: DeletionRequestHandler,
}

impl Platform {
    /// Initializes the platform, or returns the existing instance.
    ///
    /// The arguments of any call after the first are ignored.
    pub fn init(
        accounts: Arc<dyn AccountService>,
        store: Arc<dyn DocumentStore>,
    ) -> &'static Platform {
        let mut first = false;
        let platform = PLATFORM.get_or_init(|| {
            first = true;
            Platform {
                handler: DeletionRequestHandler::new(accounts, store),
            }
        });
        if first {
            info!("Platform initialized");
        } else {
            debug!("Platform already initialized; keeping the first instance");
        }
        platform
    }

    /// The platform, if [`Platform::init`] has run.
    pub fn get() -> Option<&'static Platform> {
        PLATFORM.get()
    }

    pub fn handler(&self) -> &DeletionRequestHandler {
        &self.handler
    }
}
