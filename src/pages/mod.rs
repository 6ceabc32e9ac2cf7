//! Page components for the Kindred app.

mod inbox;
mod landing;
mod people;

pub use inbox::Inbox;
pub use landing::Landing;
pub use people::People;
