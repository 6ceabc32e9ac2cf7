use std::sync::Arc;

use dioxus::prelude::*;
use kindred_core::{AppState, Directory, Store};
use tokio::sync::RwLock;

use crate::context::{get_data_dir, SharedStore};
use crate::pages::{Inbox, Landing, People};
use crate::seed;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with the sign-in card
/// - `/people` - Directory search with follow controls
/// - `/inbox` - Chat inbox with filtering
#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/people")]
    People {},
    #[route("/inbox")]
    Inbox {},
}

/// Root application component.
///
/// Provides global styles, state, store, and directory context, then
/// routes.
#[component]
pub fn App() -> Element {
    // The bundled seed parses once; the directory signal and the
    // initial inbox both come out of it
    let (seed_directory, seed_inbox) = use_hook(seed::load);

    // One state tree for the whole app
    let mut app_state: Signal<AppState> = use_signal(move || {
        let mut state = AppState::default();
        state.chat.inbox = seed_inbox;
        state
    });

    // Bundled people directory
    let directory: Signal<Directory> = use_signal(move || seed_directory);

    // Persistent store, opened asynchronously on mount
    let store: Signal<SharedStore> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut store_ready: Signal<bool> = use_signal(|| false);

    use_context_provider(|| app_state);
    use_context_provider(|| directory);
    use_context_provider(|| store);
    use_context_provider(|| store_ready);

    // Open the store and restore any persisted session
    use_effect(move || {
        spawn(async move {
            let db_path = get_data_dir().join("kindred.db");
            match Store::open(&db_path) {
                Ok(st) => {
                    match st.load_session() {
                        Ok(Some(snapshot)) => {
                            tracing::info!("Restoring session for '{}'", snapshot.username);
                            app_state.write().config = snapshot.restore();
                        }
                        Ok(None) => {}
                        Err(e) => {
                            tracing::warn!("Failed to load persisted session: {}", e);
                        }
                    }

                    let shared = store();
                    let mut guard = shared.write().await;
                    *guard = Some(st);
                    drop(guard);
                    store_ready.set(true);
                    tracing::info!("Store opened at {:?}", db_path);
                }
                Err(e) => {
                    tracing::error!("Failed to open store: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
