// crates/sync-adapter/src/testing.rs
//! In-memory collaborators for tests and examples
//!
//! Every fake is cheaply cloneable and shares state across clones, so a
//! test can keep a handle while the adapter owns another.

use crate::ports::{AccountDirectory, DeviceIdSource, FlagSource, LocalStore, TokenSource};
use feedsync_core::{
    AccountIdentity, AuthFailureCause, DeletedRow, Partition, RowValues, SubscriptionRow,
    SyncResult,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory local store recording every insert
#[derive(Clone, Default)]
pub struct MemoryStore {
    active: Arc<Mutex<Vec<SubscriptionRow>>>,
    deleted: Arc<Mutex<Vec<DeletedRow>>>,
    writes: Arc<Mutex<Vec<(Partition, RowValues)>>>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the active partition
    pub fn with_active(self, rows: Vec<SubscriptionRow>) -> Self {
        *self.active.lock().unwrap() = rows;
        self
    }

    /// Seeds the deleted partition
    pub fn with_deleted(self, rows: Vec<DeletedRow>) -> Self {
        *self.deleted.lock().unwrap() = rows;
        self
    }

    /// Every insert issued against the store, in order
    pub fn writes(&self) -> Vec<(Partition, RowValues)> {
        self.writes.lock().unwrap().clone()
    }
}

impl LocalStore for MemoryStore {
    fn query_active(&self, account: &AccountIdentity) -> SyncResult<Vec<SubscriptionRow>> {
        Ok(self
            .active
            .lock()
            .unwrap()
            .iter()
            .filter(|row| &row.account == account)
            .cloned()
            .collect())
    }

    fn query_deleted(&self, account: &AccountIdentity) -> SyncResult<Vec<DeletedRow>> {
        Ok(self
            .deleted
            .lock()
            .unwrap()
            .iter()
            .filter(|row| &row.account == account)
            .cloned()
            .collect())
    }

    fn insert(&self, partition: Partition, values: RowValues) -> SyncResult<()> {
        self.writes.lock().unwrap().push((partition, values));
        Ok(())
    }
}

/// Token source returning a fixed token or a fixed failure
#[derive(Clone)]
pub struct StaticTokens {
    result: Result<String, AuthFailureCause>,
    requests: Arc<Mutex<Vec<(AccountIdentity, String)>>>,
}

impl StaticTokens {
    /// Always returns the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            result: Ok(token.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always fails with the given cause
    pub fn failing(cause: AuthFailureCause) -> Self {
        Self {
            result: Err(cause),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every (account, service) pair a token was requested for
    pub fn requests(&self) -> Vec<(AccountIdentity, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl TokenSource for StaticTokens {
    fn token(
        &self,
        account: &AccountIdentity,
        service: &str,
    ) -> Result<String, AuthFailureCause> {
        self.requests
            .lock()
            .unwrap()
            .push((account.clone(), service.to_string()));
        self.result.clone()
    }
}

/// Device-id source returning a fixed id
#[derive(Clone, Copy)]
pub struct FixedDeviceId(pub u64);

impl DeviceIdSource for FixedDeviceId {
    fn device_id(&self) -> Option<u64> {
        Some(self.0)
    }
}

/// Device-id source with no device-id service available
#[derive(Clone, Copy)]
pub struct NoDeviceId;

impl DeviceIdSource for NoDeviceId {
    fn device_id(&self) -> Option<u64> {
        None
    }
}

/// Flag source over a fixed map, counting reads
#[derive(Clone, Default)]
pub struct StaticFlags {
    flags: HashMap<String, String>,
    reads: Arc<Mutex<usize>>,
}

impl StaticFlags {
    /// No flags set
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rmq2 routing flag set to `"true"`
    pub fn rmq2_enabled() -> Self {
        Self::empty().with_flag(crate::routing::RMQ2_ROUTING_FLAG, "true")
    }

    /// The rmq2 routing flag set to `"false"`
    pub fn rmq2_disabled() -> Self {
        Self::empty().with_flag(crate::routing::RMQ2_ROUTING_FLAG, "false")
    }

    /// Sets a flag value
    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Number of flag reads issued so far
    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl FlagSource for StaticFlags {
    fn flag(&self, name: &str) -> Option<String> {
        *self.reads.lock().unwrap() += 1;
        self.flags.get(name).cloned()
    }
}

/// Account directory returning a fixed list or a fixed failure
#[derive(Clone)]
pub struct StaticAccounts {
    result: Result<Vec<String>, AuthFailureCause>,
}

impl StaticAccounts {
    /// Always returns the given account names
    pub fn new(names: Vec<String>) -> Self {
        Self { result: Ok(names) }
    }

    /// Always fails with the given cause
    pub fn failing(cause: AuthFailureCause) -> Self {
        Self { result: Err(cause) }
    }
}

impl AccountDirectory for StaticAccounts {
    fn accounts_with_capability(
        &self,
        _account_type: &str,
        _capability: &str,
    ) -> Result<Vec<String>, AuthFailureCause> {
        self.result.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedsync_core::LocalId;

    #[test]
    fn test_memory_store_filters_by_account() {
        let alice = AccountIdentity::new("alice", "google");
        let bob = AccountIdentity::new("bob", "google");
        let store = MemoryStore::new().with_active(vec![
            SubscriptionRow::new(alice.clone(), LocalId::new(1), "http://x/feed", "sub"),
            SubscriptionRow::new(bob.clone(), LocalId::new(2), "http://y/feed", "sub"),
        ]);

        assert_eq!(store.query_active(&alice).unwrap().len(), 1);
        assert_eq!(store.query_active(&bob).unwrap().len(), 1);
    }

    #[test]
    fn test_memory_store_records_writes_in_order() {
        let alice = AccountIdentity::new("alice", "google");
        let store = MemoryStore::new();
        store
            .insert(Partition::Active, RowValues::for_account(&alice))
            .unwrap();
        store
            .insert(Partition::Deleted, RowValues::for_account(&alice))
            .unwrap();

        let writes = store.writes();
        assert_eq!(writes[0].0, Partition::Active);
        assert_eq!(writes[1].0, Partition::Deleted);
    }

    #[test]
    fn test_static_flags_count_reads() {
        let flags = StaticFlags::rmq2_enabled();
        assert_eq!(flags.read_count(), 0);
        flags.flag(crate::routing::RMQ2_ROUTING_FLAG);
        flags.flag("other");
        assert_eq!(flags.read_count(), 2);
    }
}
