// crates/core/src/types/values.rs
//! Write-op shapes handed to local storage

use crate::types::{AccountIdentity, LocalId};
use serde::{Deserialize, Serialize};

/// Target partition for a local write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Partition {
    /// Live subscriptions
    Active,
    /// Pending deletions awaiting server acknowledgment
    Deleted,
}

/// Field map for one insert against local storage
///
/// Inserts are the only write this crate issues; replacement is
/// expressed by the store's own uniqueness on (account, local id).
/// Absent fields are left unset in the store, not written as defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValues {
    /// Owning account name
    pub account_name: String,
    /// Owning account namespace
    pub account_type: String,
    /// Local row reference the engine correlates this write with
    pub local_id: Option<LocalId>,
    /// Remote identifier
    pub server_id: Option<String>,
    /// Server revision
    pub version: Option<String>,
    /// Feed address; never present on deleted-partition writes
    pub feed: Option<String>,
    /// Version echo recorded at sync time
    pub sync_time: Option<String>,
    /// Dirty flag; cleared on just-synced rows
    pub dirty: Option<bool>,
}

impl RowValues {
    /// Creates a value map carrying only the account identity
    pub fn for_account(account: &AccountIdentity) -> Self {
        Self {
            account_name: account.name.clone(),
            account_type: account.account_type.clone(),
            local_id: None,
            server_id: None,
            version: None,
            feed: None,
            sync_time: None,
            dirty: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_account_carries_identity_only() {
        let account = AccountIdentity::new("alice", "google");
        let values = RowValues::for_account(&account);
        assert_eq!(values.account_name, "alice");
        assert_eq!(values.account_type, "google");
        assert!(values.server_id.is_none());
        assert!(values.feed.is_none());
        assert!(values.dirty.is_none());
    }

    #[test]
    fn test_partition_equality() {
        assert_eq!(Partition::Active, Partition::Active);
        assert_ne!(Partition::Active, Partition::Deleted);
    }
}
