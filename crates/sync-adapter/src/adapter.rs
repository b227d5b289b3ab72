// crates/sync-adapter/src/adapter.rs
//! Reconciliation driver
//!
//! The thin orchestration surface the external generic sync engine
//! composes with, one call per record. The engine owns paging,
//! batching, retries, and session-level abort policy; this adapter
//! answers what to read, how to convert each row, and which session
//! policies apply to subscribed feeds.

use crate::auth::CredentialResolver;
use crate::codec::EntryCodec;
use crate::ports::{AccountDirectory, DeviceIdSource, FlagSource, LocalStore, TokenSource};
use crate::routing::RoutingResolver;
use feedsync_core::{
    AccountIdentity, DeletedRow, LocalId, SubscribedFeedsEntry, SubscriptionRow, SyncResult,
};
use serde::{Deserialize, Serialize};

/// Default base resource collection URL for subscribed feeds
pub const DEFAULT_FEED_URL: &str = "https://android.clients.google.com/gsync/sub";

/// Default account namespace tokens are issued under
pub const DEFAULT_TOKEN_ACCOUNT_TYPE: &str = "com.google.GAIA";

/// Query parameter carrying the routing identifier on feed fetches
const ROUTING_INFO_PARAMETER: &str = "routinginfo";

/// Configuration for the subscribed-feeds adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Base resource collection URL
    pub base_feed_url: String,
    /// Account namespace tokens are issued under
    pub token_account_type: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_feed_url: DEFAULT_FEED_URL.to_string(),
            token_account_type: DEFAULT_TOKEN_ACCOUNT_TYPE.to_string(),
        }
    }
}

/// Capability surface a generic sync engine drives per record
///
/// One sync session runs on a single worker context per account; the
/// engine reads local rows (active, then deleted) before applying any
/// server entries back, in the order the server returns them.
pub trait ReconcileAdapter {
    /// Feed URL server diffs are fetched from
    fn feed_url(&self, account: &AccountIdentity) -> String;

    /// Extra query parameters to attach to every feed fetch
    fn query_parameters(&self, account: &AccountIdentity) -> Vec<(String, String)>;

    /// All active-partition rows needing upload consideration
    fn read_active(&self, account: &AccountIdentity) -> SyncResult<Vec<SubscriptionRow>>;

    /// All deleted-partition rows awaiting server-side deletion
    fn read_deleted(&self, account: &AccountIdentity) -> SyncResult<Vec<DeletedRow>>;

    /// Outbound entry for a local row, plus the create-at URL for rows
    /// the server has never acknowledged
    fn entry_for_row(
        &self,
        row: &SubscriptionRow,
    ) -> SyncResult<(SubscribedFeedsEntry, Option<String>)>;

    /// Deletion marker for a deleted-partition row
    fn entry_for_deleted_row(&self, row: &DeletedRow) -> SyncResult<SubscribedFeedsEntry>;

    /// Persists a server-reported entry into local storage
    fn apply_server_entry(
        &self,
        entry: &SubscribedFeedsEntry,
        account: &AccountIdentity,
        local_id: Option<LocalId>,
    ) -> SyncResult<()>;

    /// Whether the server feed is an incremental diff rather than a
    /// complete snapshot
    fn contains_diffs(&self) -> bool;

    /// Whether the server reports per-item tombstones
    fn supports_tombstones(&self) -> bool;

    /// Whether the session may proceed when per-item tombstones cannot
    /// be produced
    fn handle_all_deleted_unavailable(&self) -> bool;

    /// Whether the session should abort because too many local rows are
    /// pending deletion
    fn too_many_deletions(&self, deleted_count: usize) -> bool;
}

/// The subscribed-feeds reconciliation adapter
pub struct SubscribedFeedsAdapter<S, T, D, F, A> {
    store: S,
    codec: EntryCodec<T, D, F, A>,
    config: AdapterConfig,
}

impl<S, T, D, F, A> SubscribedFeedsAdapter<S, T, D, F, A>
where
    S: LocalStore,
    T: TokenSource,
    D: DeviceIdSource,
    F: FlagSource,
    A: AccountDirectory,
{
    /// Creates an adapter over the platform collaborators
    pub fn new(
        config: AdapterConfig,
        store: S,
        tokens: T,
        device_ids: D,
        flags: F,
        accounts: A,
    ) -> Self {
        let credentials = CredentialResolver::new(tokens, config.token_account_type.clone());
        let routing = RoutingResolver::new(device_ids, flags, accounts);
        let codec = EntryCodec::new(credentials, routing, config.base_feed_url.clone());
        Self {
            store,
            codec,
            config,
        }
    }

    /// The adapter's configuration
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }
}

impl<S, T, D, F, A> ReconcileAdapter for SubscribedFeedsAdapter<S, T, D, F, A>
where
    S: LocalStore,
    T: TokenSource,
    D: DeviceIdSource,
    F: FlagSource,
    A: AccountDirectory,
{
    fn feed_url(&self, _account: &AccountIdentity) -> String {
        self.config.base_feed_url.clone()
    }

    fn query_parameters(&self, account: &AccountIdentity) -> Vec<(String, String)> {
        match self.codec.routing_info(account) {
            Some(routing) => vec![(ROUTING_INFO_PARAMETER.to_string(), routing)],
            None => Vec::new(),
        }
    }

    fn read_active(&self, account: &AccountIdentity) -> SyncResult<Vec<SubscriptionRow>> {
        self.store.query_active(account)
    }

    fn read_deleted(&self, account: &AccountIdentity) -> SyncResult<Vec<DeletedRow>> {
        self.store.query_deleted(account)
    }

    fn entry_for_row(
        &self,
        row: &SubscriptionRow,
    ) -> SyncResult<(SubscribedFeedsEntry, Option<String>)> {
        self.codec.entry_for_row(row)
    }

    fn entry_for_deleted_row(&self, row: &DeletedRow) -> SyncResult<SubscribedFeedsEntry> {
        self.codec.entry_for_deleted_row(row)
    }

    fn apply_server_entry(
        &self,
        entry: &SubscribedFeedsEntry,
        account: &AccountIdentity,
        local_id: Option<LocalId>,
    ) -> SyncResult<()> {
        self.codec
            .apply_server_entry(entry, account, local_id, &self.store)
    }

    fn contains_diffs(&self) -> bool {
        // The server returns the complete authoritative list on every
        // fetch, never an incremental diff.
        false
    }

    fn supports_tombstones(&self) -> bool {
        false
    }

    fn handle_all_deleted_unavailable(&self) -> bool {
        // Absence from the latest snapshot is the deletion signal;
        // a session is never failed for lacking per-item tombstones.
        log::warn!("subscribed feeds don't use tombstones");
        true
    }

    fn too_many_deletions(&self, _deleted_count: usize) -> bool {
        // The device is the authority on which subscriptions exist, so
        // any number of local deletions is acceptable.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        FixedDeviceId, MemoryStore, NoDeviceId, StaticAccounts, StaticFlags, StaticTokens,
    };
    use feedsync_core::LocalId;

    fn account() -> AccountIdentity {
        AccountIdentity::new("alice", "google")
    }

    fn adapter(
        store: MemoryStore,
    ) -> SubscribedFeedsAdapter<MemoryStore, StaticTokens, FixedDeviceId, StaticFlags, StaticAccounts>
    {
        SubscribedFeedsAdapter::new(
            AdapterConfig::default(),
            store,
            StaticTokens::new("token-1"),
            FixedDeviceId(255),
            StaticFlags::rmq2_enabled(),
            StaticAccounts::new(vec![]),
        )
    }

    #[test]
    fn test_default_config() {
        let config = AdapterConfig::default();
        assert_eq!(config.base_feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.token_account_type, DEFAULT_TOKEN_ACCOUNT_TYPE);
    }

    #[test]
    fn test_feed_url_is_config_base() {
        let adapter = adapter(MemoryStore::new());
        assert_eq!(adapter.feed_url(&account()), DEFAULT_FEED_URL);
    }

    #[test]
    fn test_query_parameters_carry_routing_info() {
        let adapter = adapter(MemoryStore::new());
        let params = adapter.query_parameters(&account());
        assert_eq!(
            params,
            vec![("routinginfo".to_string(), "android://ff".to_string())]
        );
    }

    #[test]
    fn test_query_parameters_omit_unavailable_routing() {
        let adapter = SubscribedFeedsAdapter::new(
            AdapterConfig::default(),
            MemoryStore::new(),
            StaticTokens::new("token-1"),
            NoDeviceId,
            StaticFlags::rmq2_enabled(),
            StaticAccounts::new(vec![]),
        );
        assert!(adapter.query_parameters(&account()).is_empty());
    }

    #[test]
    fn test_session_policies() {
        let adapter = adapter(MemoryStore::new());
        assert!(!adapter.contains_diffs());
        assert!(!adapter.supports_tombstones());
        assert!(adapter.handle_all_deleted_unavailable());
    }

    #[test]
    fn test_deletion_count_never_rejected() {
        let adapter = adapter(MemoryStore::new());
        assert!(!adapter.too_many_deletions(0));
        assert!(!adapter.too_many_deletions(1));
        assert!(!adapter.too_many_deletions(1000));
    }

    #[test]
    fn test_read_paths_project_store_rows() {
        let row = SubscriptionRow::new(account(), LocalId::new(1), "http://x/feed", "sub");
        let deleted = DeletedRow::new(account(), LocalId::new(2)).with_server_id("42", "7");
        let store = MemoryStore::new()
            .with_active(vec![row.clone()])
            .with_deleted(vec![deleted.clone()]);

        let adapter = adapter(store);
        assert_eq!(adapter.read_active(&account()).unwrap(), vec![row]);
        assert_eq!(adapter.read_deleted(&account()).unwrap(), vec![deleted]);
    }
}
