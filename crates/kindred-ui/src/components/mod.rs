//! Reusable UI components for the Kindred design system
//!
//! Light surfaces, pill buttons, and circular avatars:
//! - One accent color per action (blue, green, red)
//! - Cards sit on white with soft shadows
//! - Follow-state buttons share a fixed width so toggling never shifts layout

mod avatar;
mod button;
mod input;
mod progress;
mod user_card;

pub use avatar::*;
pub use button::*;
pub use input::*;
pub use progress::*;
pub use user_card::*;
