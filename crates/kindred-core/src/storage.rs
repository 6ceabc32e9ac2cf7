//! Persistent storage using redb.
//!
//! This module provides ACID-compliant storage for:
//! - The signed-in session (identity plus the social graph)
//! - Cached directory search results
//!
//! Search records are wrapped in a versioned envelope so a format
//! change invalidates old rows instead of misparsing them, and each
//! record echoes its own query so a row can be checked against the key
//! it was found under.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::error::{KindredError, KindredResult};
use crate::search::{SearchQuery, SearchResult};
use crate::state::ConfigState;

// Table definitions
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");
const SEARCH_RESULTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("search_results");

/// Bumped whenever the on-disk record layout changes
const STORE_SCHEMA_VERSION: u8 = 1;

/// Single row key for the current session
const SESSION_KEY: &str = "current";

/// On-disk envelope for one cached search result
#[derive(Debug, Serialize, Deserialize)]
struct StoredSearchResult {
    version: u8,
    result: SearchResult,
}

/// Everything worth keeping across restarts for one signed-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub username: String,
    pub following: HashMap<String, bool>,
    pub followers: HashMap<String, bool>,
    /// Unix seconds when the session began
    pub signed_in_at: i64,
}

impl SessionSnapshot {
    /// Capture the persistable part of an active session
    ///
    /// Returns `None` when no session is active.
    pub fn capture(config: &ConfigState) -> Option<Self> {
        if !config.logged_in {
            return None;
        }
        let username = config.username.clone()?;
        Some(Self {
            username,
            following: config.following.clone(),
            followers: config.followers.clone(),
            signed_in_at: Utc::now().timestamp(),
        })
    }

    /// Rebuild session config from a snapshot
    pub fn restore(self) -> ConfigState {
        ConfigState {
            username: Some(self.username),
            logged_in: true,
            following: self.following,
            followers: self.followers,
        }
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Store {
    db: Arc<RwLock<Database>>,
}

impl Store {
    /// Open (or create) the store at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn open(path: impl AsRef<Path>) -> KindredResult<Self> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        // Initialize all tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
            let _ = write_txn.open_table(SEARCH_RESULTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Session Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save the current session, overwriting any previous one
    pub fn save_session(&self, snapshot: &SessionSnapshot) -> KindredResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            let data = postcard::to_allocvec(snapshot)
                .map_err(|e| KindredError::Serialization(e.to_string()))?;
            table.insert(SESSION_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the persisted session, if one exists
    pub fn load_session(&self) -> KindredResult<Option<SessionSnapshot>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(SESSION_KEY)? {
            Some(data) => {
                let snapshot: SessionSnapshot = postcard::from_bytes(data.value())
                    .map_err(|e| KindredError::Serialization(e.to_string()))?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Remove the persisted session
    ///
    /// Returns `Ok(())` even if no session was stored.
    pub fn clear_session(&self) -> KindredResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(SESSION_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Search Cache Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Cache a search result under its own query
    ///
    /// Results for an empty query are skipped with a warning; there is
    /// nothing meaningful to key them by.
    pub fn put_search_result(&self, result: &SearchResult) -> KindredResult<()> {
        if result.query.is_empty() {
            tracing::warn!("refusing to cache a search result with an empty query");
            return Ok(());
        }

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SEARCH_RESULTS_TABLE)?;
            let stored = StoredSearchResult {
                version: STORE_SCHEMA_VERSION,
                result: result.clone(),
            };
            let data = postcard::to_allocvec(&stored)
                .map_err(|e| KindredError::Serialization(e.to_string()))?;
            table.insert(result.query.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the cached result for a query
    ///
    /// Returns `None` on a clean miss. A record that decodes but fails
    /// a sanity check (wrong schema version, wrong query echo) comes
    /// back as [`KindredError::CacheCorrupt`]; callers decide whether
    /// to treat that as a miss.
    pub fn get_search_result(&self, query: &SearchQuery) -> KindredResult<Option<SearchResult>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SEARCH_RESULTS_TABLE)?;

        match table.get(query.as_str())? {
            Some(data) => {
                let stored: StoredSearchResult = postcard::from_bytes(data.value())
                    .map_err(|e| KindredError::Serialization(e.to_string()))?;

                if stored.version != STORE_SCHEMA_VERSION {
                    return Err(KindredError::CacheCorrupt(format!(
                        "schema version {} (expected {})",
                        stored.version, STORE_SCHEMA_VERSION
                    )));
                }
                if stored.result.query.is_empty() {
                    return Err(KindredError::CacheCorrupt(
                        "record carries an empty query".to_string(),
                    ));
                }
                if stored.result.query != *query {
                    return Err(KindredError::CacheCorrupt(format!(
                        "record under \"{}\" echoes query \"{}\"",
                        query, stored.result.query
                    )));
                }

                Ok(Some(stored.result))
            }
            None => Ok(None),
        }
    }

    /// Drop the cached result for a query
    ///
    /// Returns `Ok(())` even if nothing was cached.
    pub fn remove_search_result(&self, query: &SearchQuery) -> KindredResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SEARCH_RESULTS_TABLE)?;
            table.remove(query.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::UserSummary;
    use tempfile::tempdir;

    fn open_store(dir: &tempfile::TempDir) -> Store {
        Store::open(dir.path().join("kindred.db")).unwrap()
    }

    fn sample_result(query: &str) -> SearchResult {
        SearchResult::new(
            SearchQuery::new(query),
            vec![UserSummary::new("chris", "Chris Ferris", true)],
        )
    }

    fn raw_insert(store: &Store, key: &str, bytes: &[u8]) {
        let db = store.db.read();
        let write_txn = db.begin_write().unwrap();
        {
            let mut table = write_txn.open_table(SEARCH_RESULTS_TABLE).unwrap();
            table.insert(key, bytes).unwrap();
        }
        write_txn.commit().unwrap();
    }

    #[test]
    fn test_search_result_roundtrip() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let result = sample_result("chris");
        store.put_search_result(&result).unwrap();

        let loaded = store.get_search_result(&SearchQuery::new("chris")).unwrap();
        assert_eq!(loaded, Some(result));
    }

    #[test]
    fn test_missing_result_is_none() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let loaded = store.get_search_result(&SearchQuery::new("nobody")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_empty_query_is_not_cached() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let result = sample_result("   ");
        store.put_search_result(&result).unwrap();
        let loaded = store.get_search_result(&SearchQuery::new("")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_version_mismatch_is_corrupt() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let stored = StoredSearchResult {
            version: STORE_SCHEMA_VERSION + 1,
            result: sample_result("chris"),
        };
        raw_insert(&store, "chris", &postcard::to_allocvec(&stored).unwrap());

        let err = store
            .get_search_result(&SearchQuery::new("chris"))
            .unwrap_err();
        assert!(matches!(err, KindredError::CacheCorrupt(_)));
    }

    #[test]
    fn test_query_echo_mismatch_is_corrupt() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        // a record for "max" filed under "chris"
        let stored = StoredSearchResult {
            version: STORE_SCHEMA_VERSION,
            result: sample_result("max"),
        };
        raw_insert(&store, "chris", &postcard::to_allocvec(&stored).unwrap());

        let err = store
            .get_search_result(&SearchQuery::new("chris"))
            .unwrap_err();
        assert!(matches!(err, KindredError::CacheCorrupt(_)));
    }

    #[test]
    fn test_undecodable_record_is_serialization_error() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        raw_insert(&store, "chris", &[0xff, 0xff, 0xff, 0xff]);

        let err = store
            .get_search_result(&SearchQuery::new("chris"))
            .unwrap_err();
        assert!(matches!(err, KindredError::Serialization(_)));
    }

    #[test]
    fn test_removing_a_corrupt_record_leaves_a_clean_miss() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let stored = StoredSearchResult {
            version: STORE_SCHEMA_VERSION + 1,
            result: sample_result("chris"),
        };
        raw_insert(&store, "chris", &postcard::to_allocvec(&stored).unwrap());

        let query = SearchQuery::new("chris");
        assert!(store.get_search_result(&query).is_err());

        // dropping the bad record turns the error into an ordinary miss
        store.remove_search_result(&query).unwrap();
        assert_eq!(store.get_search_result(&query).unwrap(), None);
    }

    #[test]
    fn test_remove_search_result() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        let result = sample_result("chris");
        store.put_search_result(&result).unwrap();
        store
            .remove_search_result(&SearchQuery::new("chris"))
            .unwrap();

        let loaded = store.get_search_result(&SearchQuery::new("chris")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_session_roundtrip_and_clear() {
        let dir = tempdir().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.load_session().unwrap(), None);

        let mut config = ConfigState::default();
        config.begin_session("alice");
        config.set_following("max", true);
        let snapshot = SessionSnapshot::capture(&config).unwrap();

        store.save_session(&snapshot).unwrap();
        assert_eq!(store.load_session().unwrap(), Some(snapshot));

        store.clear_session().unwrap();
        assert_eq!(store.load_session().unwrap(), None);
    }

    #[test]
    fn test_capture_requires_active_session() {
        let config = ConfigState::default();
        assert_eq!(SessionSnapshot::capture(&config), None);
    }

    #[test]
    fn test_restore_rebuilds_config() {
        let mut config = ConfigState::default();
        config.begin_session("alice");
        config.set_following("max", false);
        config.set_follower("chris", true);

        let snapshot = SessionSnapshot::capture(&config).unwrap();
        let restored = snapshot.restore();
        assert_eq!(restored, config);
    }
}
