//! Avatar Component
//!
//! Circular portrait used by cards and list rows. Shows the person's
//! initial when a username is known, a silhouette when it is not.

use dioxus::prelude::*;

/// Host that serves public profiles
pub const AVATAR_HOST: &str = "kindred.page";

/// Public profile address for a username
///
/// Absent when there is no username to point at.
pub fn profile_url(username: Option<&str>) -> Option<String> {
    username.map(|u| format!("https://{}/{}", AVATAR_HOST, u))
}

/// Uppercased initial used as the portrait placeholder
fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// Properties for the Avatar component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Diameter in px
    #[props(default = 40.0)]
    pub size: f32,
    /// Whose portrait this is
    #[props(default)]
    pub username: Option<String>,
    /// Profile address, surfaced as the hover title
    #[props(default)]
    pub url: Option<String>,
    /// Click handler; the avatar is only clickable when one is given
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Circular avatar with initial or silhouette fallback
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let clickable = props.onclick.is_some();
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = match (clickable, extra_class.is_empty()) {
        (true, true) => "avatar avatar-clickable".to_string(),
        (true, false) => format!("avatar avatar-clickable {}", extra_class),
        (false, true) => "avatar".to_string(),
        (false, false) => format!("avatar {}", extra_class),
    };

    let size = props.size;
    let dimensions = format!(
        "width: {}px; height: {}px; font-size: {}px;",
        size,
        size,
        size * 0.4
    );
    let title = props.url.clone().unwrap_or_default();
    let letter = props.username.as_deref().map(initial);

    rsx! {
        span {
            class: "{full_class}",
            style: "{dimensions}",
            title: "{title}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if let Some(letter) = letter {
                span { class: "avatar-initial", "{letter}" }
            } else {
                // Silhouette placeholder
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    view_box: "0 0 100 100",
                    class: "avatar-silhouette",
                    circle {
                        cx: "50",
                        cy: "35",
                        r: "20",
                        fill: "currentColor",
                    }
                    path {
                        d: "M 20 80 Q 20 55, 50 55 Q 80 55, 80 80",
                        fill: "currentColor",
                    }
                }
            }
        }
    }
}
