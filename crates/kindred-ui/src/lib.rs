//! Kindred UI Components
//!
//! This crate provides the Dioxus components shared across Kindred
//! screens, plus the color palette they draw from.
//!
//! ## Design Philosophy
//!
//! Friendly and flat, in the manner of a people directory:
//! - **Blue (#33a0ff)**: primary actions and links
//! - **Green (#3dcc8e)**: the follow relationship
//! - **Red (#ff4d61)**: destructive actions
//! - **White surfaces**: cards and inputs sit on light grey pages
//!
//! Components are presentational. They receive everything through
//! props and report back through `EventHandler` callbacks; application
//! state stays with the caller.

pub mod components;
pub mod palette;

pub use components::*;
