//! Chat inbox entries and filtering

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// One conversation row in the chat inbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboxEntry {
    /// Time-ordered unique id
    pub id: Ulid,
    /// Username of the other party
    pub peer: String,
    /// Last message preview
    pub snippet: String,
    /// Unix seconds of the last activity
    pub last_active: i64,
}

impl InboxEntry {
    /// Create an entry stamped with the current time
    pub fn new(peer: &str, snippet: &str) -> Self {
        Self {
            id: Ulid::new(),
            peer: peer.to_string(),
            snippet: snippet.to_string(),
            last_active: chrono::Utc::now().timestamp(),
        }
    }

    /// Case-insensitive match against peer name and snippet
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.peer.to_lowercase().contains(needle) || self.snippet.to_lowercase().contains(needle)
    }
}

/// Order entries most recently active first
pub fn sort_recent_first(entries: &mut [InboxEntry]) {
    entries.sort_by(|a, b| b.last_active.cmp(&a.last_active));
}

/// Apply the inbox search filter to a list of entries
///
/// `filter` is the raw filter text: `None` or blank means no filtering,
/// anything else narrows to entries matching it case-insensitively.
/// Entry order is preserved.
pub fn filter_inbox<'a>(entries: &'a [InboxEntry], filter: Option<&str>) -> Vec<&'a InboxEntry> {
    match filter {
        Some(raw) if !raw.trim().is_empty() => {
            let needle = raw.trim().to_lowercase();
            entries.iter().filter(|e| e.matches(&needle)).collect()
        }
        _ => entries.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> Vec<InboxEntry> {
        vec![
            InboxEntry::new("chris", "see you at the standup"),
            InboxEntry::new("max", "merged the release branch"),
            InboxEntry::new("alice", "lunch tomorrow?"),
        ]
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let entries = inbox();
        assert_eq!(filter_inbox(&entries, None).len(), 3);
        assert_eq!(filter_inbox(&entries, Some("   ")).len(), 3);
    }

    #[test]
    fn test_filter_matches_peer_name() {
        let entries = inbox();
        let hits = filter_inbox(&entries, Some("Max"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].peer, "max");
    }

    #[test]
    fn test_filter_matches_snippet() {
        let entries = inbox();
        let hits = filter_inbox(&entries, Some("LUNCH"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].peer, "alice");
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let entries = inbox();
        assert!(filter_inbox(&entries, Some("zzz")).is_empty());
    }

    #[test]
    fn test_sort_recent_first() {
        let mut entries = inbox();
        entries[0].last_active = 100;
        entries[1].last_active = 300;
        entries[2].last_active = 200;
        sort_recent_first(&mut entries);
        let peers: Vec<&str> = entries.iter().map(|e| e.peer.as_str()).collect();
        assert_eq!(peers, vec!["max", "alice", "chris"]);
    }
}
