// crates/sync-adapter/src/routing.rs
//! Push-routing identifier resolution
//!
//! The server addresses asynchronous notifications back to this device
//! via an opaque routing string, computed per account by one of two
//! mutually exclusive strategies selected by a server-controlled flag.
//! Routing is best effort: every failure here is logged and reported as
//! "no routing available", never as an error, so feed data still syncs
//! for accounts that cannot receive push addressing.

use crate::ports::{AccountDirectory, DeviceIdSource, FlagSource};
use feedsync_core::AccountIdentity;

/// Server-controlled flag selecting the device-scoped routing strategy
pub const RMQ2_ROUTING_FLAG: &str = "gsync_use_rmq2_routing_info";

/// Account namespace holding the primary legacy account
pub const LEGACY_ACCOUNT_TYPE: &str = "com.google";

/// Capability marking legacy hosted-or-primary accounts
pub const LEGACY_HOSTED_OR_GOOGLE: &str = "legacy_hosted_or_google";

/// Computes the routing identifier for an account
pub struct RoutingResolver<D, F, A> {
    device_ids: D,
    flags: F,
    accounts: A,
}

impl<D, F, A> RoutingResolver<D, F, A>
where
    D: DeviceIdSource,
    F: FlagSource,
    A: AccountDirectory,
{
    /// Creates a resolver over the device-id, flag, and account collaborators
    pub fn new(device_ids: D, flags: F, accounts: A) -> Self {
        Self {
            device_ids,
            flags,
            accounts,
        }
    }

    /// Routing identifier for the account, or `None` when it cannot be
    /// computed
    ///
    /// The strategy flag is re-read on every call: a stale value could
    /// route pushes to a wrong or old device identifier.
    pub fn resolve(&self, account: &AccountIdentity) -> Option<String> {
        let device_id = match self.device_ids.device_id() {
            Some(id) => id,
            None => {
                log::error!("could not get routing info for account {account}: no device id");
                return None;
            }
        };

        let use_rmq2 = self.flags.flag(RMQ2_ROUTING_FLAG).as_deref() == Some("true");
        if use_rmq2 {
            return Some(format!("android://{device_id:x}"));
        }

        // Legacy strategy: pushes are addressed to the primary legacy
        // account, not the account being synced.
        match self
            .accounts
            .accounts_with_capability(LEGACY_ACCOUNT_TYPE, LEGACY_HOSTED_OR_GOOGLE)
        {
            Ok(names) => match names.first() {
                Some(primary) => Some(format!(
                    "gtalk://{primary}#{}",
                    talk_device_id(device_id)
                )),
                None => {
                    log::error!("no matching legacy accounts");
                    None
                }
            },
            Err(cause) => {
                log::error!("could not look up the legacy account: {cause}");
                None
            }
        }
    }
}

/// Talk-service device identifier derived from the stable device id
fn talk_device_id(device_id: u64) -> String {
    format!("android-{device_id:x}")
}
