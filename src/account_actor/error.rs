//! Error types for the Account actor.

use thiserror::Error;

/// Provider code for a missing account.
pub const CODE_USER_NOT_FOUND: &str = "auth/user-not-found";

/// Legacy provider code for a missing account.
pub const CODE_USER_NOT_FOUND_LEGACY: &str = "USER_NOT_FOUND";

/// Coarse classification the deletion handler branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountErrorKind {
    NotFound,
    Other,
}

/// Errors returned by the account service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// No account exists for the uid.
    #[error("There is no user record corresponding to the provided identifier: {0}")]
    NotFound(String),

    /// The backend rejected the call with a provider error code.
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// An account with the same uid already exists.
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AccountError {
    /// Builds an error from a provider code, folding the known "missing
    /// account" codes into [`AccountError::NotFound`].
    pub fn from_code(uid: &str, code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        match code.as_str() {
            CODE_USER_NOT_FOUND | CODE_USER_NOT_FOUND_LEGACY => AccountError::NotFound(uid.to_string()),
            _ => AccountError::Service {
                code,
                message: message.into(),
            },
        }
    }

    pub fn kind(&self) -> AccountErrorKind {
        match self {
            AccountError::NotFound(_) => AccountErrorKind::NotFound,
            _ => AccountErrorKind::Other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == AccountErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_codes_are_classified() {
        assert_eq!(
            AccountError::from_code("u1", CODE_USER_NOT_FOUND, "gone").kind(),
            AccountErrorKind::NotFound
        );
        assert_eq!(
            AccountError::from_code("u1", CODE_USER_NOT_FOUND_LEGACY, "gone").kind(),
            AccountErrorKind::NotFound
        );

        let other = AccountError::from_code("u1", "auth/internal-error", "backend hiccup");
        assert_eq!(other.kind(), AccountErrorKind::Other);
        assert_eq!(other.to_string(), "auth/internal-error: backend hiccup");
    }

    #[test]
    fn communication_errors_are_not_not_found() {
        let err = AccountError::ActorCommunicationError("Actor closed".to_string());
        assert!(!err.is_not_found());
    }
}
