// crates/sync-adapter/src/codec.rs
//! Bidirectional mapping between local rows and protocol entries
//!
//! Three paths: building an outbound entry from a dirty local row,
//! persisting a server-reported entry back into local storage, and
//! building the deletion marker for a row in the deleted partition.

use crate::auth::CredentialResolver;
use crate::ports::{AccountDirectory, DeviceIdSource, FlagSource, LocalStore, TokenSource};
use crate::routing::RoutingResolver;
use feedsync_core::{
    AccountIdentity, DeletedRow, FeedUrl, LocalId, Partition, RowValues, SubscribedFeedsEntry,
    SubscriptionRow, SyncError, SyncResult, last_path_segment,
};

/// Converts between [`SubscriptionRow`]s and [`SubscribedFeedsEntry`]s
pub struct EntryCodec<T, D, F, A> {
    credentials: CredentialResolver<T>,
    routing: RoutingResolver<D, F, A>,
    base_feed_url: String,
}

impl<T, D, F, A> EntryCodec<T, D, F, A>
where
    T: TokenSource,
    D: DeviceIdSource,
    F: FlagSource,
    A: AccountDirectory,
{
    /// Creates a codec targeting the given base collection URL
    pub fn new(
        credentials: CredentialResolver<T>,
        routing: RoutingResolver<D, F, A>,
        base_feed_url: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            routing,
            base_feed_url: base_feed_url.into(),
        }
    }

    /// The base resource collection URL new entries are created at
    pub fn base_feed_url(&self) -> &str {
        &self.base_feed_url
    }

    /// Routing identifier for the account, best effort
    pub fn routing_info(&self, account: &AccountIdentity) -> Option<String> {
        self.routing.resolve(account)
    }

    /// Builds the outbound entry for a local row
    ///
    /// Returns the entry and, for rows the server has never
    /// acknowledged, the collection URL the entry must be created at.
    /// Acknowledged rows get `id == edit_uri == <base>/<server_id>` and
    /// no create URL. A token fetch failure aborts this row's
    /// conversion; the surrounding engine decides whether to retry or
    /// skip.
    pub fn entry_for_row(
        &self,
        row: &SubscriptionRow,
    ) -> SyncResult<(SubscribedFeedsEntry, Option<String>)> {
        let token = self.credentials.token(&row.account.name, &row.service)?;
        let feed_url = FeedUrl::new(&row.feed_url, &row.service, token);

        let mut entry = SubscribedFeedsEntry::new();
        if let Some(server_id) = &row.server_id {
            let id = format!("{}/{}", self.base_feed_url, server_id);
            entry.edit_uri = Some(id.clone());
            entry.id = Some(id);
        }
        entry.routing_info = self.routing.resolve(&row.account);
        entry.client_token = Some(feed_url.feed.clone());
        entry.feed_url = Some(feed_url);

        let create_url = if row.server_id.is_none() {
            Some(self.base_feed_url.clone())
        } else {
            None
        };
        Ok((entry, create_url))
    }

    /// Builds the deletion marker for a deleted-partition row
    ///
    /// A row can only be marked for server-side deletion after it has
    /// been acknowledged once, so a missing server id is a caller bug,
    /// not a recoverable condition.
    pub fn entry_for_deleted_row(&self, row: &DeletedRow) -> SyncResult<SubscribedFeedsEntry> {
        let server_id = row
            .server_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                SyncError::Precondition(format!(
                    "deleted row {} for account {} has no server id",
                    row.local_id, row.account
                ))
            })?;

        let id = format!("{}/{}", self.base_feed_url, server_id);
        let mut entry = SubscribedFeedsEntry::new();
        entry.edit_uri = Some(id.clone());
        entry.id = Some(id);
        Ok(entry)
    }

    /// Persists a server-reported entry into local storage
    ///
    /// Insert-only; repeated application is idempotent through the
    /// store's uniqueness on (account, local id). Server id and version
    /// are derived from the final path segments of `id` and `edit_uri`,
    /// only when both are non-empty; freshly created entries not yet
    /// round-tripped carry neither.
    pub fn apply_server_entry(
        &self,
        entry: &SubscribedFeedsEntry,
        account: &AccountIdentity,
        local_id: Option<LocalId>,
        store: &impl LocalStore,
    ) -> SyncResult<()> {
        let mut values = RowValues::for_account(account);
        values.local_id = local_id;

        let mut version = None;
        if let (Some(id), Some(edit_uri)) = (entry.id_if_present(), entry.edit_uri_if_present()) {
            values.server_id = Some(last_path_segment(id).to_string());
            let v = last_path_segment(edit_uri).to_string();
            values.version = Some(v.clone());
            version = Some(v);
        }

        if entry.deleted {
            // The server only confirms deletes; the deleted partition
            // carries identity and resource id, no feed payload.
            store.insert(Partition::Deleted, values)
        } else {
            let feed_url = entry.feed_url.as_ref().ok_or_else(|| {
                SyncError::Conversion("server entry carries no feed url".to_string())
            })?;
            values.feed = Some(feed_url.feed.clone());
            if let Some(v) = version.filter(|v| !v.is_empty()) {
                values.sync_time = Some(v);
            }
            // Just-synced state is by definition not dirty.
            values.dirty = Some(false);
            store.insert(Partition::Active, values)
        }
    }
}
