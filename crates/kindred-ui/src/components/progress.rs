//! Progress Indicator
//!
//! Small inline spinner shown while an action is in flight.

use dioxus::prelude::*;

/// Spinning activity indicator
///
/// Purely decorative; the element announces itself as busy for
/// assistive tech and animates via the `progress-spinner` class.
#[component]
pub fn ProgressIndicator(#[props(default)] class: Option<String>) -> Element {
    let extra_class = class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "progress-spinner".to_string()
    } else {
        format!("progress-spinner {}", extra_class)
    };

    rsx! {
        span {
            class: "{full_class}",
            role: "progressbar",
            "aria-label": "Working",
        }
    }
}
