//! People page - directory search with follow controls.
//!
//! Searches resolve through two cache layers before touching the
//! directory: the in-memory results under `entities`, then the redb
//! store. Fresh hits are served as-is; stale or corrupt records are
//! treated as misses and both layers are refreshed from the directory.

use dioxus::prelude::*;

use kindred_core::{selectors, KindredError, SearchQuery, SearchResult, SEARCH_CACHE_TTL_SECS};
use kindred_ui::{Button, ButtonVariant, SearchInput};

use crate::components::{NavHeader, NavLocation, PersonCard};
use crate::context::{use_app_state, use_directory, use_store};

/// Directory search page.
#[component]
pub fn People() -> Element {
    let mut app_state = use_app_state();
    let directory = use_directory();
    let store = use_store();

    let mut query_input = use_signal(String::new);
    let mut shown: Signal<Option<SearchResult>> = use_signal(|| None);
    let mut searching = use_signal(|| false);

    let run_search = move |_: ()| {
        let query = SearchQuery::new(&query_input());
        if query.is_empty() {
            shown.set(None);
            return;
        }
        if searching() {
            return;
        }

        // Memory layer first; a fresh hit never leaves this closure
        if let Some(result) = selectors::cached_search_results(&app_state.read(), &query) {
            if result.is_fresh(SEARCH_CACHE_TTL_SECS) {
                tracing::debug!("Search \"{}\" served from state", query);
                shown.set(Some(result.clone()));
                return;
            }
        }

        searching.set(true);
        spawn(async move {
            // Disk layer next
            let shared = store();
            let guard = shared.read().await;

            if let Some(ref st) = *guard {
                match st.get_search_result(&query) {
                    Ok(Some(result)) if result.is_fresh(SEARCH_CACHE_TTL_SECS) => {
                        tracing::debug!("Search \"{}\" served from store", query);
                        app_state.write().entities.cache_result(result.clone());
                        shown.set(Some(result));
                        searching.set(false);
                        return;
                    }
                    Ok(_) => {} // miss or stale, fall through to the directory
                    Err(KindredError::CacheCorrupt(reason)) => {
                        tracing::warn!("Dropping corrupt cache record for \"{}\": {}", query, reason);
                        if let Err(e) = st.remove_search_result(&query) {
                            tracing::warn!("Failed to drop corrupt record for \"{}\": {}", query, e);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Search cache read failed for \"{}\": {}", query, e);
                    }
                }
            }

            // Authoritative answer, then refresh both layers
            let result = directory.read().search(&query);
            app_state.write().entities.cache_result(result.clone());
            if let Some(ref st) = *guard {
                if let Err(e) = st.put_search_result(&result) {
                    // the result is still served, it just won't be cached
                    tracing::warn!("Failed to cache search result for \"{}\": {}", query, e);
                }
            }

            shown.set(Some(result));
            searching.set(false);
        });
    };

    let results = match shown() {
        None => rsx! {
            p { class: "page-hint", "Search for people by name or username." }
        },
        Some(result) if result.users.is_empty() => rsx! {
            div { class: "empty-state",
                "Nobody matches \"{result.query}\"."
            }
        },
        Some(result) => {
            let count = if result.users.len() == 1 {
                "1 person".to_string()
            } else {
                format!("{} people", result.users.len())
            };
            rsx! {
                p { class: "result-count", "{count}" }
                div { class: "people-grid",
                    for user in result.users {
                        PersonCard { key: "{user.username}", user: user.clone() }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::People }
            main { class: "page-body",
                div { class: "search-row",
                    SearchInput {
                        value: query_input(),
                        oninput: move |s: String| {
                            query_input.set(s.clone());
                            if s.trim().is_empty() {
                                shown.set(None);
                            }
                        },
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        label: "Search",
                        waiting: searching(),
                        onclick: run_search,
                    }
                }
                {results}
            }
        }
    }
}
