// crates/core/src/types/subscription.rs
//! Local subscription rows

use crate::types::{AccountIdentity, LocalId};
use serde::{Deserialize, Serialize};

/// One feed the device is subscribed to, as stored in the active partition
///
/// A row with no `server_id` has never been acknowledged by the server
/// and must be created, not updated, on the next sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRow {
    /// Owning account
    pub account: AccountIdentity,
    /// Local storage row reference
    pub local_id: LocalId,
    /// Remote identifier, absent until the first successful upload
    pub server_id: Option<String>,
    /// Last-known server revision, absent until the first successful upload
    pub version: Option<String>,
    /// Address of the subscribed feed
    pub feed_url: String,
    /// Remote service this feed belongs to
    pub service: String,
    /// Local-only changes not yet pushed
    pub dirty: bool,
}

impl SubscriptionRow {
    /// Creates a new, never-uploaded subscription row
    pub fn new(
        account: AccountIdentity,
        local_id: LocalId,
        feed_url: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            account,
            local_id,
            server_id: None,
            version: None,
            feed_url: feed_url.into(),
            service: service.into(),
            dirty: true,
        }
    }

    /// Sets the server id and version, as acknowledged by the server
    pub fn with_server_id(mut self, server_id: impl Into<String>, version: impl Into<String>) -> Self {
        self.server_id = Some(server_id.into());
        self.version = Some(version.into());
        self.dirty = false;
        self
    }

    /// Returns true if the server has acknowledged this row at least once
    pub fn is_acknowledged(&self) -> bool {
        self.server_id.is_some()
    }
}

/// A pending deletion, as stored in the deleted partition
///
/// Carries no feed payload; the server only needs the resource identity
/// to confirm the delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedRow {
    /// Owning account
    pub account: AccountIdentity,
    /// Local storage row reference
    pub local_id: LocalId,
    /// Remote identifier; required before the server can be asked to delete
    pub server_id: Option<String>,
    /// Last-known server revision
    pub version: Option<String>,
}

impl DeletedRow {
    /// Creates a deleted-partition row
    pub fn new(account: AccountIdentity, local_id: LocalId) -> Self {
        Self {
            account,
            local_id,
            server_id: None,
            version: None,
        }
    }

    /// Sets the server id and version carried over from the active row
    pub fn with_server_id(mut self, server_id: impl Into<String>, version: impl Into<String>) -> Self {
        self.server_id = Some(server_id.into());
        self.version = Some(version.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> AccountIdentity {
        AccountIdentity::new("alice", "google")
    }

    #[test]
    fn test_new_row_is_dirty_and_unacknowledged() {
        let row = SubscriptionRow::new(account(), LocalId::new(1), "http://x/feed", "sub");
        assert!(row.dirty);
        assert!(!row.is_acknowledged());
        assert!(row.server_id.is_none());
        assert!(row.version.is_none());
    }

    #[test]
    fn test_acknowledged_row() {
        let row = SubscriptionRow::new(account(), LocalId::new(1), "http://x/feed", "sub")
            .with_server_id("42", "7");
        assert!(row.is_acknowledged());
        assert!(!row.dirty);
        assert_eq!(row.server_id.as_deref(), Some("42"));
        assert_eq!(row.version.as_deref(), Some("7"));
    }

    #[test]
    fn test_deleted_row_carries_no_feed_payload() {
        let row = DeletedRow::new(account(), LocalId::new(3)).with_server_id("42", "7");
        assert_eq!(row.server_id.as_deref(), Some("42"));
        assert_eq!(row.version.as_deref(), Some("7"));
    }
}
