//! Error taxonomy of a single deletion request.

use crate::account_actor::AccountError;
use crate::model::{DeletionStatus, AUTH_USER_NOT_FOUND, MISSING_UID};
use thiserror::Error;

/// Everything that can go wrong while serving one marker.
///
/// None of these escape the handler: the terminal ones become the marker's
/// annotation and [`DeletionError::AccountLookupAmbiguous`] is only logged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeletionError {
    /// The trigger carried an empty or absent uid.
    #[error("{}", MISSING_UID)]
    MissingInput,

    /// The account does not exist (already deleted, or a stale uid).
    #[error("{}", AUTH_USER_NOT_FOUND)]
    AccountNotFound,

    /// The lookup failed for a reason other than a missing account.
    #[error("Account lookup inconclusive: {0}")]
    AccountLookupAmbiguous(AccountError),

    /// The delete call itself failed.
    #[error("{0}")]
    DeletionFailed(AccountError),
}

impl DeletionError {
    /// Status recorded on the marker when this error ends the request.
    ///
    /// An ambiguous lookup normally does not end it; if it ever does, it
    /// counts as `failed`.
    pub fn status(&self) -> DeletionStatus {
        match self {
            DeletionError::AccountNotFound => DeletionStatus::NotFound,
            DeletionError::MissingInput
            | DeletionError::AccountLookupAmbiguous(_)
            | DeletionError::DeletionFailed(_) => DeletionStatus::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_messages() {
        assert_eq!(DeletionError::MissingInput.to_string(), "Missing UID");
        assert_eq!(
            DeletionError::AccountNotFound.to_string(),
            "Auth user not found"
        );
        let err = AccountError::Service {
            code: "auth/insufficient-permission".to_string(),
            message: "caller may not delete users".to_string(),
        };
        assert_eq!(
            DeletionError::DeletionFailed(err).to_string(),
            "auth/insufficient-permission: caller may not delete users"
        );
    }

    #[test]
    fn statuses() {
        assert_eq!(DeletionError::AccountNotFound.status(), DeletionStatus::NotFound);
        assert_eq!(DeletionError::MissingInput.status(), DeletionStatus::Failed);
        let err = AccountError::ActorCommunicationError("timeout".to_string());
        assert_eq!(
            DeletionError::AccountLookupAmbiguous(err).status(),
            DeletionStatus::Failed
        );
    }
}
