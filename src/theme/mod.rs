//! Theme: global styles for the Kindred app.

mod styles;

pub use styles::GLOBAL_STYLES;
