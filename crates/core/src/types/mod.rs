// crates/core/src/types/mod.rs
//! Domain types for feedsync
//!
//! Organized by responsibility:
//! - `account`: account identity and local row references
//! - `subscription`: local subscription rows (active and deleted partitions)
//! - `entry`: the protocol-level subscription entry exchanged with the server
//! - `values`: write-op shapes handed to local storage

mod account;
mod entry;
mod subscription;
mod values;

// Re-export all public types
pub use account::{AccountIdentity, LocalId};
pub use entry::{FeedUrl, SubscribedFeedsEntry, last_path_segment};
pub use subscription::{DeletedRow, SubscriptionRow};
pub use values::{Partition, RowValues};
