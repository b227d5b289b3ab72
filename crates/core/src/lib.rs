// crates/core/src/lib.rs
//! Shared domain types and error taxonomy for feedsync
//!
//! Everything the reconciliation adapter exchanges with its collaborators
//! lives here: local subscription rows, protocol entries, the write-op
//! shapes handed to local storage, and the error types.

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{AuthFailureCause, SyncError, SyncResult};
pub use types::{
    AccountIdentity, DeletedRow, FeedUrl, LocalId, Partition, RowValues, SubscribedFeedsEntry,
    SubscriptionRow, last_path_segment,
};
