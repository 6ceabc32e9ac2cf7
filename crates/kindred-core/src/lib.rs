//! Kindred Core Library
//!
//! State model, selectors, and the local cache store for the Kindred
//! desktop client.
//!
//! ## Overview
//!
//! Kindred is a local-first people directory and chat inbox. All UI
//! state lives in one [`AppState`] tree; components read it through
//! pure selector functions and never reach into the tree directly.
//! Directory searches flow through a two-tier cache: results land in
//! `AppState::entities` for the current run and in the redb-backed
//! [`Store`] across runs.
//!
//! ## Core Principles
//!
//! - **Local-first**: searches and the inbox work against local data
//! - **Selectors over reads**: one projection per question the UI asks
//! - **Absence is answer**: lookups that can miss return `Option`
//!
//! ## Quick Start
//!
//! ```ignore
//! use kindred_core::{selectors, AppState, Directory, SearchQuery};
//!
//! fn main() {
//!     let mut state = AppState::default();
//!     state.config.begin_session("alice");
//!
//!     let directory = Directory::default();
//!     let query = SearchQuery::new("chris");
//!     state.entities.cache_result(directory.search(&query));
//!
//!     if let Some(result) = selectors::cached_search_results(&state, &query) {
//!         println!("{} people match", result.users.len());
//!     }
//! }
//! ```

pub mod chat;
pub mod error;
pub mod search;
pub mod selectors;
pub mod state;
pub mod storage;

// Re-exports
pub use chat::{filter_inbox, sort_recent_first, InboxEntry};
pub use error::{KindredError, KindredResult};
pub use search::{Directory, SearchQuery, SearchResult, UserSummary, SEARCH_CACHE_TTL_SECS};
pub use state::{AppState, ChatState, ConfigState, EntitiesState};
pub use storage::{SessionSnapshot, Store};
