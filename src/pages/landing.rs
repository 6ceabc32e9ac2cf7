//! Landing page - sign in to Kindred.
//!
//! A single user card with the sign-in form. Returning users with a
//! restored session are redirected straight to People.

use dioxus::prelude::*;

use kindred_core::{selectors, SessionSnapshot};
use kindred_ui::{Button, ButtonVariant, Input, UserCard};

use crate::app::Route;
use crate::context::{use_app_state, use_directory, use_store, use_store_ready};

/// Landing page component.
///
/// Auto-redirects to People once the store reports a restored session.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();
    let mut app_state = use_app_state();
    let directory = use_directory();
    let store = use_store();
    let store_ready = use_store_ready();

    let mut username_input = use_signal(String::new);
    let mut signing_in = use_signal(|| false);

    // Returning users skip the form entirely
    use_effect(move || {
        if store_ready() && selectors::logged_in(&app_state.read()) {
            tracing::info!("Session already active, skipping sign-in");
            navigator.push(Route::People {});
        }
    });

    let sign_in = move |_: ()| {
        let username = username_input().trim().to_lowercase();
        if username.is_empty() || signing_in() {
            return;
        }
        signing_in.set(true);

        spawn(async move {
            {
                let mut state = app_state.write();
                state.config.begin_session(&username);
                // the directory knows who already follows this account
                for follower in directory.read().follower_usernames() {
                    state.config.set_follower(&follower, true);
                }
            }

            let snapshot = SessionSnapshot::capture(&app_state.read().config);
            if let Some(snapshot) = snapshot {
                let shared = store();
                let guard = shared.read().await;
                if let Some(ref st) = *guard {
                    if let Err(e) = st.save_session(&snapshot) {
                        // sign-in still succeeds, it just won't survive a restart
                        tracing::warn!("Failed to persist session: {}", e);
                    }
                }
            }

            signing_in.set(false);
            navigator.push(Route::People {});
        });
    };

    let can_submit = !username_input().trim().is_empty() && store_ready();
    let typed = username_input().trim().to_lowercase();
    let card_username = if typed.is_empty() { None } else { Some(typed) };

    rsx! {
        main { class: "landing",
            header { class: "landing-brand",
                h1 { class: "landing-title", "Kindred" }
                p { class: "tagline", "your people, in one place" }
            }

            UserCard {
                username: card_username,
                outer_style: Some("width: 380px; max-width: 100%;".to_string()),
                div { class: "landing-form",
                    div { class: "landing-greeting", "Sign in" }
                    Input {
                        value: username_input(),
                        oninput: move |s| username_input.set(s),
                        label: "username".to_string(),
                        hint: "lowercase".to_string(),
                        placeholder: "your username".to_string(),
                        disabled: signing_in(),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        label: "Sign in",
                        full_width: true,
                        disabled: !can_submit,
                        waiting: signing_in(),
                        onclick: sign_in,
                    }
                }
            }
        }
    }
}
