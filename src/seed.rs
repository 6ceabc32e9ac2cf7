//! Bundled demo data.
//!
//! The directory and inbox ship as a JSON asset so the app has people
//! to search and conversations to list without a backend.

use kindred_core::{chat, Directory, InboxEntry, UserSummary};
use serde::Deserialize;

const SEED_JSON: &str = include_str!("../assets/seed.json");

#[derive(Debug, Deserialize)]
struct SeedData {
    users: Vec<SeedUser>,
    inbox: Vec<SeedMessage>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    username: String,
    full_name: String,
    #[serde(default)]
    follows_you: bool,
}

#[derive(Debug, Deserialize)]
struct SeedMessage {
    peer: String,
    snippet: String,
    /// How many minutes before startup the message arrived
    #[serde(default)]
    minutes_ago: i64,
}

/// Parse the bundled seed into a directory and an inbox.
///
/// A malformed asset logs and yields empty data rather than aborting
/// startup.
pub fn load() -> (Directory, Vec<InboxEntry>) {
    match serde_json::from_str::<SeedData>(SEED_JSON) {
        Ok(data) => {
            let directory = Directory::from_users(
                data.users
                    .iter()
                    .map(|u| UserSummary::new(&u.username, &u.full_name, u.follows_you))
                    .collect(),
            );

            let mut inbox: Vec<InboxEntry> = data
                .inbox
                .iter()
                .map(|m| {
                    let mut entry = InboxEntry::new(&m.peer, &m.snippet);
                    entry.last_active -= m.minutes_ago * 60;
                    entry
                })
                .collect();
            chat::sort_recent_first(&mut inbox);

            (directory, inbox)
        }
        Err(e) => {
            tracing::error!("Failed to parse bundled seed data: {}", e);
            (Directory::default(), Vec::new())
        }
    }
}
