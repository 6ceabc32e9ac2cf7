//! Navigation Header Component
//!
//! Horizontal header with app title, section links, and the session
//! controls (current username plus sign out).

use dioxus::prelude::*;
use kindred_core::selectors;
use kindred_ui::{Button, ButtonVariant};

use crate::app::Route;
use crate::context::{use_app_state, use_store};

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    People,
    Inbox,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::People => "People",
            NavLocation::Inbox => "Inbox",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::People => Route::People {},
            NavLocation::Inbox => Route::Inbox {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: "Kindred" title
/// - Center: section links with the current one highlighted
/// - Right: signed-in username and the sign-out button
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let navigator = use_navigator();
    let mut app_state = use_app_state();
    let store = use_store();

    let mut signing_out = use_signal(|| false);

    let username = selectors::username(&app_state.read()).unwrap_or("").to_string();

    let sign_out = move |_: ()| {
        if signing_out() {
            return;
        }
        signing_out.set(true);

        spawn(async move {
            let shared = store();
            let guard = shared.read().await;
            if let Some(ref st) = *guard {
                if let Err(e) = st.clear_session() {
                    // the in-memory session still ends
                    tracing::warn!("Failed to clear persisted session: {}", e);
                }
            }
            drop(guard);

            app_state.write().config.end_session();
            signing_out.set(false);
            navigator.push(Route::Landing {});
        });
    };

    rsx! {
        header { class: "nav-header",
            span { class: "nav-title", "Kindred" }
            nav { class: "nav-links",
                for location in [NavLocation::People, NavLocation::Inbox] {
                    Link {
                        to: location.route(),
                        class: if location == props.current { "nav-link nav-link-active" } else { "nav-link" },
                        {location.display_name()}
                    }
                }
            }
            div { class: "nav-session",
                span { class: "nav-username", "{username}" }
                Button {
                    variant: ButtonVariant::Danger,
                    label: "Sign out",
                    waiting: signing_out(),
                    onclick: sign_out,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_location_display_names() {
        assert_eq!(NavLocation::People.display_name(), "People");
        assert_eq!(NavLocation::Inbox.display_name(), "Inbox");
    }

    #[test]
    fn nav_location_routes() {
        assert_eq!(NavLocation::People.route(), Route::People {});
        assert_eq!(NavLocation::Inbox.route(), Route::Inbox {});
    }
}
