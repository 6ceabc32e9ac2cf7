//! Inbox page - conversation list with a live filter.
//!
//! The filter text lives in the state tree (`chat.inbox_search`), so
//! other screens can prime it; the People page does exactly that when
//! an avatar is clicked.

use dioxus::prelude::*;

use kindred_core::{filter_inbox, selectors};
use kindred_ui::{Button, ButtonVariant, SearchInput};

use crate::components::{InboxList, NavHeader, NavLocation};
use crate::context::use_app_state;

/// Chat inbox page.
#[component]
pub fn Inbox() -> Element {
    let mut app_state = use_app_state();

    let state = app_state.read();
    let filter = selectors::inbox_search(&state).map(str::to_string);
    let entries: Vec<_> = filter_inbox(&state.chat.inbox, filter.as_deref())
        .into_iter()
        .cloned()
        .collect();
    let inbox_empty = state.chat.inbox.is_empty();
    drop(state);

    let has_filter = filter.is_some();
    let filter_text = filter.unwrap_or_default();

    rsx! {
        div { class: "page",
            NavHeader { current: NavLocation::Inbox }
            main { class: "page-body",
                div { class: "inbox-toolbar",
                    SearchInput {
                        value: filter_text.clone(),
                        placeholder: "filter conversations...".to_string(),
                        oninput: move |s: String| {
                            app_state.write().chat.set_inbox_search(&s);
                        },
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        label: "Clear",
                        disabled: !has_filter,
                        onclick: move |_| {
                            app_state.write().chat.set_inbox_search("");
                        },
                    }
                }

                if inbox_empty {
                    div { class: "empty-state", "No conversations yet." }
                } else if entries.is_empty() {
                    div { class: "empty-state",
                        "No conversations match \"{filter_text}\"."
                    }
                } else {
                    InboxList { entries }
                }
            }
        }
    }
}
