//! Color constants for the Kindred design system
//!
//! Warm, light-surface palette shared by components and page styles.

#![allow(dead_code)]

// === BRAND ===
pub const BLUE: &str = "#33a0ff";
pub const GREEN: &str = "#3dcc8e";
pub const RED: &str = "#ff4d61";

// === SURFACES ===
pub const WHITE: &str = "#ffffff";
pub const LIGHT_GREY: &str = "#f0f0f0";
pub const LIGHT_GREY_2: &str = "#e6e6e6";

// === TEXT ===
pub const BLACK_75: &str = "rgba(0, 0, 0, 0.75)";
pub const BLACK_40: &str = "rgba(0, 0, 0, 0.4)";
pub const BLACK_20: &str = "rgba(0, 0, 0, 0.2)";
