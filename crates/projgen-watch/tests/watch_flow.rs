use chrono::{TimeZone, Utc};
use projgen_watch::advisor::{build_request, ensure_break_due};
use projgen_watch::omdb::parse_movie;
use projgen_watch::{Location, WatchError, WatchStore};
use serde_json::json;

fn omdb_body(id: &str, title: &str, runtime: &str) -> serde_json::Value {
    json!({ "imdbID": id, "Title": title, "Runtime": runtime, "Response": "True" })
}

#[test]
fn ledger_survives_restarts_until_break() {
    let dir = tempfile::tempdir().unwrap();
    let store = WatchStore::new(dir.path());
    let at = Utc.with_ymd_and_hms(2025, 5, 1, 21, 0, 0).unwrap();

    for i in 0..16 {
        let movie = parse_movie("id", omdb_body(&format!("tt{i:07}"), &format!("Epic {i}"), "150 min")).unwrap();
        let mut ledger = store.load_ledger().unwrap();
        ledger.mark_watched(movie.to_watched(at));
        store.save_ledger(&ledger).unwrap();
    }

    let ledger = store.load_ledger().unwrap();
    assert_eq!(ledger.len(), 16);
    assert_eq!(ledger.total_minutes(), 2400);
    assert!(ledger.break_due());
    ensure_break_due(&ledger).unwrap();

    let request = build_request(&ledger, Location { latitude: 51.5, longitude: -0.12 });
    assert!(request.messages[1].content.contains("Epic 15"));

    let mut ledger = ledger;
    ledger.reset();
    store.save_ledger(&ledger).unwrap();
    assert!(matches!(
        ensure_break_due(&store.load_ledger().unwrap()),
        Err(WatchError::BreakNotDue { .. })
    ));
}

#[test]
fn favorites_toggle_persists() {
    let dir = tempfile::tempdir().unwrap();
    let store = WatchStore::new(dir.path());
    let movie = parse_movie("tt0111161", omdb_body("tt0111161", "The Shawshank Redemption", "142 min")).unwrap();

    let mut favorites = store.load_favorites().unwrap();
    assert!(favorites.toggle(movie.to_favorite()));
    store.save_favorites(&favorites).unwrap();

    let mut favorites = store.load_favorites().unwrap();
    assert!(favorites.contains("tt0111161"));
    assert!(!favorites.toggle(movie.to_favorite()));
    store.save_favorites(&favorites).unwrap();
    assert!(store.load_favorites().unwrap().is_empty());
}
