// crates/sync-adapter/src/auth.rs
//! Credential resolution

use crate::ports::TokenSource;
use feedsync_core::{AccountIdentity, SyncError, SyncResult};

/// Obtains the auth token needed for remote subscription calls
///
/// Tokens are issued under the credential authority's own account
/// namespace, which may differ from the namespace the subscription rows
/// are stored under. Blocks the calling context until the fetch
/// completes; performs no retries of its own.
pub struct CredentialResolver<T> {
    source: T,
    token_account_type: String,
}

impl<T: TokenSource> CredentialResolver<T> {
    /// Creates a resolver issuing tokens under `token_account_type`
    pub fn new(source: T, token_account_type: impl Into<String>) -> Self {
        Self {
            source,
            token_account_type: token_account_type.into(),
        }
    }

    /// Current token for the account/service pair
    ///
    /// All three failure causes surface as one [`SyncError::Auth`]: the
    /// step that needed the token cannot proceed regardless of why the
    /// fetch failed.
    pub fn token(&self, account_name: &str, service: &str) -> SyncResult<String> {
        let credential_account = AccountIdentity::new(account_name, &self.token_account_type);
        self.source
            .token(&credential_account, service)
            .map_err(|cause| {
                log::error!(
                    "could not get an auth token for account {credential_account}, \
                     service {service}: {cause}"
                );
                SyncError::Auth {
                    account: account_name.to_string(),
                    service: service.to_string(),
                    cause,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticTokens;
    use feedsync_core::AuthFailureCause;

    #[test]
    fn test_token_success() {
        let resolver = CredentialResolver::new(StaticTokens::new("token-1"), "com.google.GAIA");
        let token = resolver.token("alice", "sub").unwrap();
        assert_eq!(token, "token-1");
    }

    #[test]
    fn test_token_requested_under_credential_namespace() {
        let tokens = StaticTokens::new("token-1");
        let resolver = CredentialResolver::new(tokens.clone(), "com.google.GAIA");
        resolver.token("alice", "sub").unwrap();

        let requests = tokens.requests();
        assert_eq!(requests.len(), 1);
        let (account, service) = &requests[0];
        assert_eq!(account.name, "alice");
        assert_eq!(account.account_type, "com.google.GAIA");
        assert_eq!(service, "sub");
    }

    #[test]
    fn test_each_failure_cause_surfaces_as_auth_error() {
        for cause in [
            AuthFailureCause::Io,
            AuthFailureCause::AuthenticatorMissing,
            AuthFailureCause::Cancelled,
        ] {
            let resolver = CredentialResolver::new(StaticTokens::failing(cause), "com.google.GAIA");
            let err = resolver.token("alice", "sub").unwrap_err();
            assert_eq!(err.auth_cause(), Some(cause));
        }
    }
}
