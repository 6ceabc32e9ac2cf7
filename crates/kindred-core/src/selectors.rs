//! Read-only projections over [`AppState`]
//!
//! Every selector borrows from the state it is given and performs no
//! mutation. Lookups that can miss return `Option` so callers decide
//! what absence means; nothing here fabricates defaults.

use crate::search::{SearchQuery, SearchResult};
use crate::state::AppState;

/// Username of the signed-in user, if any
pub fn username(state: &AppState) -> Option<&str> {
    state.config.username.as_deref()
}

/// Whether a session is active
pub fn logged_in(state: &AppState) -> bool {
    state.config.logged_in
}

/// Cached directory result for `query`, if one has been stored
pub fn cached_search_results<'a>(
    state: &'a AppState,
    query: &SearchQuery,
) -> Option<&'a SearchResult> {
    state.entities.search_query_to_result.get(query)
}

/// Active inbox filter text, if any
pub fn inbox_search(state: &AppState) -> Option<&str> {
    state.chat.inbox_search.as_deref()
}

/// Whether the signed-in user follows `other_user`
///
/// `None` means the relationship was never loaded, which is distinct
/// from an explicit `Some(false)`.
pub fn am_i_following(state: &AppState, other_user: &str) -> Option<bool> {
    state.config.following.get(other_user).copied()
}

/// Whether `other_user` follows the signed-in user
pub fn am_i_being_followed(state: &AppState, other_user: &str) -> Option<bool> {
    state.config.followers.get(other_user).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchResult;

    #[test]
    fn test_username_absent_until_session_begins() {
        let mut state = AppState::default();
        assert_eq!(username(&state), None);
        assert!(!logged_in(&state));

        state.config.begin_session("alice");
        assert_eq!(username(&state), Some("alice"));
        assert!(logged_in(&state));
    }

    #[test]
    fn test_cached_search_results_mirror_the_map() {
        let mut state = AppState::default();
        let query = SearchQuery::new("alice");
        assert_eq!(cached_search_results(&state, &query), None);

        let result = SearchResult::new(query.clone(), Vec::new());
        state.entities.cache_result(result.clone());
        assert_eq!(cached_search_results(&state, &query), Some(&result));
    }

    #[test]
    fn test_equivalent_queries_hit_the_same_slot() {
        let mut state = AppState::default();
        let result = SearchResult::new(SearchQuery::new("alice"), Vec::new());
        state.entities.cache_result(result.clone());

        // differently-written input normalizes to the same key
        assert_eq!(
            cached_search_results(&state, &SearchQuery::new("  ALICE ")),
            Some(&result)
        );
    }

    #[test]
    fn test_inbox_search_reflects_the_filter() {
        let mut state = AppState::default();
        assert_eq!(inbox_search(&state), None);
        state.chat.set_inbox_search("max");
        assert_eq!(inbox_search(&state), Some("max"));
    }

    #[test]
    fn test_am_i_following_preserves_all_three_states() {
        let mut state = AppState::default();
        state.config.set_following("max", true);
        state.config.set_following("chris", false);

        assert_eq!(am_i_following(&state, "max"), Some(true));
        assert_eq!(am_i_following(&state, "chris"), Some(false));
        assert_eq!(am_i_following(&state, "nobody"), None);
    }

    #[test]
    fn test_am_i_being_followed_reads_the_followers_map() {
        let mut state = AppState::default();
        state.config.set_follower("max", true);

        assert_eq!(am_i_being_followed(&state, "max"), Some(true));
        assert_eq!(am_i_being_followed(&state, "alice"), None);
    }
}
