// crates/core/src/types/account.rs
//! Account identity and local row references

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the account that owns a subscription
///
/// Passed explicitly into every resolver and codec call; no component
/// reads an ambient "current account".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// Account name, e.g. an email address
    pub name: String,
    /// Account namespace, e.g. `com.google`
    pub account_type: String,
}

impl AccountIdentity {
    /// Creates an account identity
    pub fn new(name: impl Into<String>, account_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_type: account_type.into(),
        }
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Opaque reference to a local storage row
///
/// Assigned by the storage collaborator, never generated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalId(i64);

impl LocalId {
    /// Creates a local id from a raw row reference
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw row reference
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_identity_display() {
        let account = AccountIdentity::new("alice", "google");
        assert_eq!(account.to_string(), "alice (google)");
    }

    #[test]
    fn test_account_identity_equality() {
        let a = AccountIdentity::new("alice", "google");
        let b = AccountIdentity::new("alice", "google");
        let c = AccountIdentity::new("alice", "other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_local_id_roundtrip() {
        let id = LocalId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }
}
