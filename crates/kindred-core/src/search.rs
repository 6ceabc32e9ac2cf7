//! People search: queries, results, and the in-process directory

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// How long a cached search result stays servable before a reload
pub const SEARCH_CACHE_TTL_SECS: i64 = 15 * 60;

/// A normalized search query
///
/// Queries are trimmed and lowercased on construction so that
/// "Alice ", "alice" and "ALICE" all hit the same cache slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw user input into a query
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the normalized query text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when normalization left nothing to search for
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One person as the directory describes them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    pub full_name: String,
    /// Whether this person follows the signed-in user
    pub follows_you: bool,
}

impl UserSummary {
    pub fn new(username: &str, full_name: &str, follows_you: bool) -> Self {
        Self {
            username: username.to_string(),
            full_name: full_name.to_string(),
            follows_you,
        }
    }
}

/// The outcome of one directory search, stamped at fetch time
///
/// The query is echoed into the result so a record read back from the
/// cache can be checked against the key it was found under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: SearchQuery,
    pub users: Vec<UserSummary>,
    /// Unix seconds when the directory answered
    pub fetched_at: i64,
}

impl SearchResult {
    /// Build a result stamped with the current time
    pub fn new(query: SearchQuery, users: Vec<UserSummary>) -> Self {
        Self {
            query,
            users,
            fetched_at: Utc::now().timestamp(),
        }
    }

    /// True while the result is younger than `ttl_secs`
    pub fn is_fresh(&self, ttl_secs: i64) -> bool {
        Utc::now().timestamp() - self.fetched_at < ttl_secs
    }
}

/// The searchable people directory
///
/// Stands in for the remote user service: every search the app runs
/// resolves against this set, and cache layers sit in front of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    users: Vec<UserSummary>,
}

impl Directory {
    pub fn from_users(users: Vec<UserSummary>) -> Self {
        Self { users }
    }

    /// Find one person by exact username
    pub fn lookup(&self, username: &str) -> Option<&UserSummary> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Usernames of everyone who follows the signed-in user
    pub fn follower_usernames(&self) -> Vec<String> {
        self.users
            .iter()
            .filter(|u| u.follows_you)
            .map(|u| u.username.clone())
            .collect()
    }

    /// Run a substring search over usernames and full names
    ///
    /// An empty query matches nobody. Results are ordered by username.
    pub fn search(&self, query: &SearchQuery) -> SearchResult {
        if query.is_empty() {
            return SearchResult::new(query.clone(), Vec::new());
        }

        let needle = query.as_str();
        let mut users: Vec<UserSummary> = self
            .users
            .iter()
            .filter(|u| {
                u.username.to_lowercase().contains(needle)
                    || u.full_name.to_lowercase().contains(needle)
            })
            .cloned()
            .collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));

        SearchResult::new(query.clone(), users)
    }
}
