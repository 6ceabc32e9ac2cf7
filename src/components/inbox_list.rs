//! Inbox List Component
//!
//! Conversation rows: avatar, peer name, last message preview, and a
//! relative timestamp.

use dioxus::prelude::*;
use kindred_core::InboxEntry;
use kindred_ui::{profile_url, Avatar};

/// Format a unix-seconds timestamp as relative time
fn format_time(timestamp: i64) -> String {
    let elapsed_secs = chrono::Utc::now().timestamp() - timestamp;

    if elapsed_secs < 60 {
        "Just now".to_string()
    } else if elapsed_secs < 3600 {
        format!("{}m ago", elapsed_secs / 60)
    } else if elapsed_secs < 86400 {
        format!("{}h ago", elapsed_secs / 3600)
    } else {
        format!("{}d ago", elapsed_secs / 86400)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct InboxListProps {
    /// Entries to render, already filtered and ordered
    pub entries: Vec<InboxEntry>,
}

/// List of inbox conversation rows
#[component]
pub fn InboxList(props: InboxListProps) -> Element {
    rsx! {
        div { class: "inbox-list",
            for entry in props.entries {
                div { class: "inbox-row", key: "{entry.id}",
                    Avatar {
                        size: 40.0,
                        username: Some(entry.peer.clone()),
                        url: profile_url(Some(&entry.peer)),
                    }
                    div { class: "inbox-row-main",
                        div { class: "inbox-peer", "{entry.peer}" }
                        div { class: "inbox-snippet", "{entry.snippet}" }
                    }
                    span { class: "inbox-time", "{format_time(entry.last_active)}" }
                }
            }
        }
    }
}
