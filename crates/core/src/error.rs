// crates/core/src/error.rs
//! Error taxonomy for subscription reconciliation
//!
//! Only failures that affect the identity of a record are errors here.
//! An unavailable routing identifier or device id is represented as an
//! absent `Option`, never as an error: sync must proceed for feed data
//! even when push routing cannot be established.

use std::fmt;
use thiserror::Error;

/// Result type for reconciliation operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Why a credential or account lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailureCause {
    /// I/O failure reaching the credential authority
    Io,
    /// No authenticator is registered for the account
    AuthenticatorMissing,
    /// The operation was cancelled by the user or operator
    Cancelled,
}

impl fmt::Display for AuthFailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "I/O failure"),
            Self::AuthenticatorMissing => write!(f, "authenticator missing"),
            Self::Cancelled => write!(f, "operation cancelled"),
        }
    }
}

/// Errors that can occur while reconciling subscriptions
#[derive(Debug, Error)]
pub enum SyncError {
    /// Credential fetch or account lookup failed; the step that needed
    /// the token cannot proceed regardless of the cause
    #[error("Auth failure for account {account}, service {service}: {cause}")]
    Auth {
        account: String,
        service: String,
        cause: AuthFailureCause,
    },

    /// Malformed or incomplete entry data; fatal for this row only
    #[error("Conversion failure: {0}")]
    Conversion(String),

    /// A caller invariant was violated
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// Local storage rejected an operation
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SyncError {
    /// Returns the auth failure cause, if this is an auth error
    pub fn auth_cause(&self) -> Option<AuthFailureCause> {
        match self {
            Self::Auth { cause, .. } => Some(*cause),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = SyncError::Auth {
            account: "alice".to_string(),
            service: "sub".to_string(),
            cause: AuthFailureCause::Cancelled,
        };
        let msg = err.to_string();
        assert!(msg.contains("alice"));
        assert!(msg.contains("sub"));
        assert!(msg.contains("cancelled"));
    }

    #[test]
    fn test_auth_cause_accessor() {
        let err = SyncError::Auth {
            account: "alice".to_string(),
            service: "sub".to_string(),
            cause: AuthFailureCause::Io,
        };
        assert_eq!(err.auth_cause(), Some(AuthFailureCause::Io));
        assert_eq!(SyncError::Conversion("bad".to_string()).auth_cause(), None);
    }

    #[test]
    fn test_precondition_display() {
        let err = SyncError::Precondition("deleted row has no server id".to_string());
        assert!(err.to_string().contains("Precondition violated"));
    }

    #[test]
    fn test_cause_display() {
        assert_eq!(AuthFailureCause::Io.to_string(), "I/O failure");
        assert_eq!(
            AuthFailureCause::AuthenticatorMissing.to_string(),
            "authenticator missing"
        );
    }
}
