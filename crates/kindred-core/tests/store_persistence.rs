//! Store persistence across reopen
//!
//! Exercises the full sign-in, cache, restart, restore cycle against a
//! real database file.

use kindred_core::search::{SearchQuery, SearchResult, UserSummary};
use kindred_core::state::ConfigState;
use kindred_core::storage::{SessionSnapshot, Store};
use tempfile::tempdir;

#[test]
fn session_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kindred.db");

    let mut config = ConfigState::default();
    config.begin_session("alice");
    config.set_following("max", true);
    config.set_following("chris", false);
    config.set_follower("max", true);
    let snapshot = SessionSnapshot::capture(&config).unwrap();

    {
        let store = Store::open(&db_path).unwrap();
        store.save_session(&snapshot).unwrap();
    }

    let store = Store::open(&db_path).unwrap();
    let restored = store.load_session().unwrap().unwrap().restore();
    assert_eq!(restored, config);
}

#[test]
fn search_cache_survives_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kindred.db");

    let query = SearchQuery::new("chris");
    let result = SearchResult::new(
        query.clone(),
        vec![
            UserSummary::new("chris", "Chris Ferris", true),
            UserSummary::new("tina", "Christina Maldonado", false),
        ],
    );

    {
        let store = Store::open(&db_path).unwrap();
        store.put_search_result(&result).unwrap();
    }

    let store = Store::open(&db_path).unwrap();
    assert_eq!(store.get_search_result(&query).unwrap(), Some(result));
}

#[test]
fn cleared_session_stays_cleared_after_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kindred.db");

    let mut config = ConfigState::default();
    config.begin_session("alice");
    let snapshot = SessionSnapshot::capture(&config).unwrap();

    {
        let store = Store::open(&db_path).unwrap();
        store.save_session(&snapshot).unwrap();
        store.clear_session().unwrap();
    }

    let store = Store::open(&db_path).unwrap();
    assert_eq!(store.load_session().unwrap(), None);
}

#[test]
fn opening_twice_in_one_directory_is_fine() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("kindred.db");

    {
        let store = Store::open(&db_path).unwrap();
        drop(store);
    }
    // a second open against the same file must not trip table setup
    let store = Store::open(&db_path).unwrap();
    assert_eq!(
        store.get_search_result(&SearchQuery::new("anyone")).unwrap(),
        None
    );
}
