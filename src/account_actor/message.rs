//! Messages exchanged between the [`AccountClient`](crate::clients::AccountClient)
//! and the [`AccountActor`](super::AccountActor).

use super::AccountError;
use crate::model::AccountInfo;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, AccountError>>;

/// Account operation a scripted fault can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountOp {
    Lookup,
    Delete,
}

#[derive(Debug)]
pub enum AccountRequest {
    Create {
        account: AccountInfo,
        respond_to: Response<()>,
    },
    Lookup {
        uid: String,
        respond_to: Response<AccountInfo>,
    },
    Delete {
        uid: String,
        respond_to: Response<()>,
    },
    Count {
        respond_to: Response<usize>,
    },
    /// Makes the next `op` call for `uid` fail with `error`.
    FailNext {
        uid: String,
        op: AccountOp,
        error: AccountError,
        respond_to: Response<()>,
    },
    /// Stops the event loop even while other clients are still alive.
    Shutdown { respond_to: Response<()> },
}
