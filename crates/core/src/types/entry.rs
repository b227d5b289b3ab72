// crates/core/src/types/entry.rs
//! Protocol-level subscription entry

use serde::{Deserialize, Serialize};

/// Composite feed address uploaded with each subscription
///
/// The remote service uses all three parts to fetch the underlying feed
/// on the device's behalf: the target feed address, the service name,
/// and an auth token, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedUrl {
    /// Address of the feed being subscribed to
    pub feed: String,
    /// Remote service the feed belongs to
    pub service: String,
    /// Auth token the server presents when fetching the feed
    pub auth_token: String,
}

impl FeedUrl {
    /// Creates a composite feed address
    pub fn new(
        feed: impl Into<String>,
        service: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self {
            feed: feed.into(),
            service: service.into(),
            auth_token: auth_token.into(),
        }
    }
}

/// The subscription entry exchanged with the remote service
///
/// Produced already-parsed by the transport collaborator on the inbound
/// path and handed back to it on the outbound path; this crate never
/// sees wire bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribedFeedsEntry {
    /// Full resource identifier; the last path segment is the server id
    pub id: Option<String>,
    /// Full edit-location; the last path segment is the version
    pub edit_uri: Option<String>,
    /// Composite feed address, absent on deletion markers
    pub feed_url: Option<FeedUrl>,
    /// Identifier the server uses to address pushes back to this device
    pub routing_info: Option<String>,
    /// Client-side echo token correlating creation responses to entries
    pub client_token: Option<String>,
    /// Server reported this entry as deleted
    pub deleted: bool,
}

impl SubscribedFeedsEntry {
    /// Creates an empty entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id, treating an empty string as absent
    pub fn id_if_present(&self) -> Option<&str> {
        self.id.as_deref().filter(|s| !s.is_empty())
    }

    /// Returns the edit uri, treating an empty string as absent
    pub fn edit_uri_if_present(&self) -> Option<&str> {
        self.edit_uri.as_deref().filter(|s| !s.is_empty())
    }
}

/// Final segment of a slash-delimited resource path
///
/// Resource identifiers and edit references are slash-delimited paths
/// whose final segment is the opaque id or version.
pub fn last_path_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_path_segment() {
        assert_eq!(last_path_segment("https://host/feed/42"), "42");
        assert_eq!(last_path_segment("42"), "42");
        assert_eq!(last_path_segment("https://host/feed/"), "");
    }

    #[test]
    fn test_empty_id_treated_as_absent() {
        let mut entry = SubscribedFeedsEntry::new();
        assert!(entry.id_if_present().is_none());
        entry.id = Some(String::new());
        assert!(entry.id_if_present().is_none());
        entry.id = Some("https://host/feed/42".to_string());
        assert_eq!(entry.id_if_present(), Some("https://host/feed/42"));
    }

    #[test]
    fn test_default_entry_is_empty() {
        let entry = SubscribedFeedsEntry::new();
        assert!(entry.id.is_none());
        assert!(entry.edit_uri.is_none());
        assert!(entry.feed_url.is_none());
        assert!(entry.routing_info.is_none());
        assert!(!entry.deleted);
    }

    #[test]
    fn test_entry_serialization() {
        let mut entry = SubscribedFeedsEntry::new();
        entry.feed_url = Some(FeedUrl::new("http://x/feed", "sub", "token-1"));
        entry.client_token = Some("http://x/feed".to_string());

        let json = serde_json::to_string(&entry).unwrap();
        let decoded: SubscribedFeedsEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, decoded);
    }
}
