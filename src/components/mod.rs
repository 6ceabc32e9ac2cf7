//! App-level components for Kindred.
//!
//! Screen-specific pieces that know about routes, context, and the
//! store; the presentational building blocks live in `kindred-ui`.

mod inbox_list;
mod nav_header;
mod person_card;

pub use inbox_list::InboxList;
pub use nav_header::{NavHeader, NavLocation};
pub use person_card::PersonCard;
