//! The application state tree
//!
//! One nested value owns everything the UI reads: session identity and
//! the social graph under `config`, cached directory lookups under
//! `entities`, and the chat inbox under `chat`. Components never reach
//! into the tree directly; they go through [`crate::selectors`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chat::InboxEntry;
use crate::search::{SearchQuery, SearchResult};

/// Root of the state tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub config: ConfigState,
    pub entities: EntitiesState,
    pub chat: ChatState,
}

/// Session identity and the social graph
///
/// The follow maps are tri-state: a username maps to `true`, to `false`
/// (explicitly cleared), or is absent because the relationship was
/// never loaded. Selectors surface the distinction as `Option<bool>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigState {
    pub username: Option<String>,
    pub logged_in: bool,
    /// Usernames the signed-in user follows
    pub following: HashMap<String, bool>,
    /// Usernames following the signed-in user
    pub followers: HashMap<String, bool>,
}

impl ConfigState {
    /// Mark a session as started for `username`
    pub fn begin_session(&mut self, username: &str) {
        self.username = Some(username.to_string());
        self.logged_in = true;
    }

    /// End the session and drop everything tied to it
    pub fn end_session(&mut self) {
        self.username = None;
        self.logged_in = false;
        self.following.clear();
        self.followers.clear();
    }

    /// Record a follow decision for `username`
    ///
    /// Unfollowing writes an explicit `false` rather than removing the
    /// key, so "unfollowed" stays distinguishable from "never loaded".
    pub fn set_following(&mut self, username: &str, following: bool) {
        self.following.insert(username.to_string(), following);
    }

    /// Record whether `username` follows the signed-in user
    pub fn set_follower(&mut self, username: &str, follows: bool) {
        self.followers.insert(username.to_string(), follows);
    }
}

/// Normalized caches of fetched data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitiesState {
    /// Search results keyed by the normalized query that produced them
    pub search_query_to_result: HashMap<SearchQuery, SearchResult>,
}

impl EntitiesState {
    /// Cache a search result under its own query
    pub fn cache_result(&mut self, result: SearchResult) {
        self.search_query_to_result
            .insert(result.query.clone(), result);
    }
}

/// Chat inbox and its filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    pub inbox: Vec<InboxEntry>,
    /// Raw inbox filter text, absent when no filter is active
    pub inbox_search: Option<String>,
}

impl ChatState {
    /// Set or clear the inbox filter
    ///
    /// Blank input clears the filter entirely so "no filter" stays a
    /// single representation.
    pub fn set_inbox_search(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            self.inbox_search = None;
        } else {
            self.inbox_search = Some(raw.to_string());
        }
    }
}
