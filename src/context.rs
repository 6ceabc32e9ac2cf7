//! Shared context for the Kindred app.
//!
//! Provides the application state tree, the persistent store, and the
//! people directory to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let state = use_app_state();
//! let username = selectors::username(&state.read()).map(str::to_string);
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use kindred_core::{AppState, Directory, Store};
use tokio::sync::RwLock;

/// Shared store type for context.
///
/// The store is wrapped in Arc<RwLock<>> to allow:
/// - Multiple components to read concurrently
/// - Async tasks to hold it across await points
pub type SharedStore = Arc<RwLock<Option<Store>>>;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Hook to access the application state tree from context.
///
/// Components read it through selectors and write it through the state
/// methods; nobody else holds UI state.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Hook to access the persistent store from context.
///
/// # Example
///
/// ```ignore
/// let store = use_store();
///
/// spawn(async move {
///     let shared = store();
///     let guard = shared.read().await;
///     if let Some(ref st) = *guard {
///         let _ = st.load_session();
///     }
/// });
/// ```
pub fn use_store() -> Signal<SharedStore> {
    use_context::<Signal<SharedStore>>()
}

/// Hook to check if the store has been opened.
///
/// Returns a reactive signal that flips once on startup.
pub fn use_store_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the people directory from context.
///
/// The directory is the search source of truth; cache layers in state
/// and the store sit in front of it.
pub fn use_directory() -> Signal<Directory> {
    use_context::<Signal<Directory>>()
}
