//! User Card Component
//!
//! White card with a large avatar overhanging its top edge and a body
//! that callers fill with whatever the screen needs (login form,
//! profile summary, follow controls).

use dioxus::prelude::*;

use crate::components::avatar::{profile_url, Avatar};

/// Diameter of the card avatar in px
///
/// The card's top offsets are derived from this so the avatar always
/// straddles the edge by exactly half its height.
pub const AVATAR_SIZE: f32 = 110.0;

/// Properties for the UserCard component
#[derive(Clone, PartialEq, Props)]
pub struct UserCardProps {
    /// Whose card this is; absent renders the silhouette avatar
    #[props(default)]
    pub username: Option<String>,
    /// Click handler for the avatar
    #[props(default)]
    pub on_avatar_clicked: Option<EventHandler<()>>,
    /// Extra inline CSS for the card body
    #[props(default)]
    pub style: Option<String>,
    /// Extra inline CSS for the outer container
    #[props(default)]
    pub outer_style: Option<String>,
    /// Body content
    pub children: Element,
}

/// Card with an overhanging avatar and caller-provided body
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     UserCard {
///         username: Some("chris".to_string()),
///         on_avatar_clicked: move |_| open_profile(),
///         h2 { "Chris Coyne" }
///         Button { variant: ButtonVariant::Follow, label: "Follow" }
///     }
/// }
/// ```
#[component]
pub fn UserCard(props: UserCardProps) -> Element {
    // the avatar straddles the card's top edge by half its height
    let half = AVATAR_SIZE / 2.0;

    let outer_css = props.outer_style.clone().unwrap_or_default();
    let body_css = match props.style.as_deref() {
        Some(extra) => format!("margin-top: {}px; {}", half, extra),
        None => format!("margin-top: {}px;", half),
    };
    let avatar_css = format!("top: -{}px;", half);

    let url = profile_url(props.username.as_deref());

    rsx! {
        div { class: "user-card", style: "{outer_css}",
            div { class: "user-card-avatar", style: "{avatar_css}",
                Avatar {
                    size: AVATAR_SIZE,
                    username: props.username.clone(),
                    url,
                    onclick: props.on_avatar_clicked,
                }
            }
            div { class: "user-card-body", style: "{body_css}",
                {props.children}
            }
        }
    }
}
