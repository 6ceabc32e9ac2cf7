//! Person Card Component
//!
//! One search result: a user card with name, follow badge, and the
//! follow lifecycle controls. Following is a two-step exit: the
//! "Following" button arms an unfollow confirmation rather than
//! unfollowing outright.

use dioxus::prelude::*;
use kindred_core::{selectors, SessionSnapshot, UserSummary};
use kindred_ui::{Button, ButtonVariant, UserCard};

use crate::app::Route;
use crate::context::{use_app_state, use_store};

#[derive(Props, Clone, PartialEq)]
pub struct PersonCardProps {
    pub user: UserSummary,
}

#[component]
pub fn PersonCard(props: PersonCardProps) -> Element {
    let navigator = use_navigator();
    let mut app_state = use_app_state();
    let store = use_store();

    let mut confirming_unfollow = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let username = props.user.username.clone();
    let is_self =
        selectors::username(&app_state.read()) == Some(username.as_str());
    let following =
        selectors::am_i_following(&app_state.read(), &username) == Some(true);
    let follows_me =
        selectors::am_i_being_followed(&app_state.read(), &username) == Some(true);

    // Follow changes survive restarts via the session snapshot
    let persist_session = move || {
        spawn(async move {
            let snapshot = SessionSnapshot::capture(&app_state.read().config);
            if let Some(snapshot) = snapshot {
                let shared = store();
                let guard = shared.read().await;
                if let Some(ref st) = *guard {
                    if let Err(e) = st.save_session(&snapshot) {
                        tracing::warn!("Failed to persist follow change: {}", e);
                    }
                }
            }
            saving.set(false);
        });
    };

    let follow_user = username.clone();
    let do_follow = move |_: ()| {
        if saving() {
            return;
        }
        saving.set(true);
        app_state.write().config.set_following(&follow_user, true);
        persist_session();
    };

    let unfollow_user = username.clone();
    let do_unfollow = move |_: ()| {
        if saving() {
            return;
        }
        saving.set(true);
        app_state.write().config.set_following(&unfollow_user, false);
        confirming_unfollow.set(false);
        persist_session();
    };

    // avatar click jumps to conversations with this person
    let avatar_user = username.clone();
    let open_conversations = move |_: ()| {
        app_state.write().chat.set_inbox_search(&avatar_user);
        navigator.push(Route::Inbox {});
    };

    rsx! {
        UserCard {
            username: Some(username.clone()),
            on_avatar_clicked: open_conversations,
            style: Some("padding-bottom: 24px;".to_string()),
            div { class: "person-name", "{props.user.full_name}" }
            div { class: "person-username", "@{props.user.username}" }
            if follows_me {
                span { class: "follows-you-badge", "Follows you" }
            }
            if !is_self {
                div { class: "follow-controls",
                    if !following {
                        Button {
                            variant: ButtonVariant::Follow,
                            label: "Follow",
                            waiting: saving(),
                            onclick: do_follow,
                        }
                    } else if !confirming_unfollow() {
                        Button {
                            variant: ButtonVariant::Following,
                            label: "Following",
                            onclick: move |_| confirming_unfollow.set(true),
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Unfollow,
                            label: "Unfollow",
                            waiting: saving(),
                            onclick: do_unfollow,
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            label: "Cancel",
                            disabled: saving(),
                            onclick: move |_| confirming_unfollow.set(false),
                        }
                    }
                }
            }
        }
    }
}
