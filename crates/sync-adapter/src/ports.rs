// crates/sync-adapter/src/ports.rs
//! Collaborator traits
//!
//! Everything the adapter needs from the platform is reached through
//! these seams: local storage, the credential authority, the device-id
//! service, server-controlled flags, and the account directory. The
//! credential and account calls block the calling context until they
//! complete; callers that cannot tolerate blocking must run them on a
//! dedicated worker.

use feedsync_core::{
    AccountIdentity, AuthFailureCause, DeletedRow, Partition, RowValues, SubscriptionRow,
    SyncResult,
};

/// Minimal query/insert surface over local subscription storage
///
/// The store owns transactions and concurrency control; this crate only
/// issues inserts and relies on the store's uniqueness on
/// (account, local id) to express replacement.
pub trait LocalStore {
    /// All active-partition rows for the account
    fn query_active(&self, account: &AccountIdentity) -> SyncResult<Vec<SubscriptionRow>>;

    /// All deleted-partition rows for the account
    fn query_deleted(&self, account: &AccountIdentity) -> SyncResult<Vec<DeletedRow>>;

    /// Inserts one row into the given partition
    fn insert(&self, partition: Partition, values: RowValues) -> SyncResult<()>;
}

/// Blocking credential authority
///
/// The call is idempotent and safe to repeat; retries, if any, belong
/// to the caller.
pub trait TokenSource {
    /// Current auth token for the account/service pair
    fn token(&self, account: &AccountIdentity, service: &str)
        -> Result<String, AuthFailureCause>;
}

/// Stable per-device numeric identifier
pub trait DeviceIdSource {
    /// The device id, or `None` when the device-id service is absent
    fn device_id(&self) -> Option<u64>;
}

/// Server-controlled feature flags
///
/// Values are fetched fresh on every call; this crate never caches them.
pub trait FlagSource {
    /// Current value of the named flag, if set
    fn flag(&self, name: &str) -> Option<String>;
}

/// Directory of accounts known to the device
pub trait AccountDirectory {
    /// Names of accounts of the given type carrying the given capability,
    /// primary account first
    fn accounts_with_capability(
        &self,
        account_type: &str,
        capability: &str,
    ) -> Result<Vec<String>, AuthFailureCause>;
}
