// crates/sync-adapter/src/lib.rs
//! Reconciliation adapter for subscribed feeds
//!
//! Keeps a device's local store of feed subscriptions consistent with a
//! remote subscription service:
//! - Dirty and deleted local rows are converted into protocol entries
//!   for upload
//! - Server-reported entries are persisted back as local rows with
//!   correct versioning
//! - A per-account routing identifier lets the server address push
//!   notifications back to the device
//! - Auth tokens for the remote calls come from a blocking credential
//!   authority
//!
//! The generic bidirectional sync engine, wire transport, and storage
//! engine are external collaborators reached through the collaborator
//! traits ([`LocalStore`], [`TokenSource`], [`DeviceIdSource`],
//! [`FlagSource`], [`AccountDirectory`]); the engine composes with
//! [`ReconcileAdapter`] one call per record.
//!
//! # Example
//!
//! ```rust
//! use feedsync_adapter::testing::{
//!     FixedDeviceId, MemoryStore, StaticAccounts, StaticFlags, StaticTokens,
//! };
//! use feedsync_adapter::{AdapterConfig, ReconcileAdapter, SubscribedFeedsAdapter};
//! use feedsync_core::AccountIdentity;
//!
//! let adapter = SubscribedFeedsAdapter::new(
//!     AdapterConfig::default(),
//!     MemoryStore::new(),
//!     StaticTokens::new("token-1"),
//!     FixedDeviceId(0xff),
//!     StaticFlags::rmq2_enabled(),
//!     StaticAccounts::new(vec![]),
//! );
//!
//! let account = AccountIdentity::new("alice", "google");
//! assert_eq!(
//!     adapter.query_parameters(&account),
//!     vec![("routinginfo".to_string(), "android://ff".to_string())],
//! );
//! assert!(!adapter.too_many_deletions(1000));
//! ```

mod adapter;
mod auth;
mod codec;
mod ports;
mod routing;
pub mod testing;

pub use adapter::{
    AdapterConfig, DEFAULT_FEED_URL, DEFAULT_TOKEN_ACCOUNT_TYPE, ReconcileAdapter,
    SubscribedFeedsAdapter,
};
pub use auth::CredentialResolver;
pub use codec::EntryCodec;
pub use ports::{AccountDirectory, DeviceIdSource, FlagSource, LocalStore, TokenSource};
pub use routing::{LEGACY_ACCOUNT_TYPE, LEGACY_HOSTED_OR_GOOGLE, RMQ2_ROUTING_FLAG, RoutingResolver};

// Re-export the shared domain types alongside the adapter surface.
pub use feedsync_core::{
    AccountIdentity, AuthFailureCause, DeletedRow, FeedUrl, LocalId, Partition, RowValues,
    SubscribedFeedsEntry, SubscriptionRow, SyncError, SyncResult,
};
