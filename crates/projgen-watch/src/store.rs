//! JSON persistence for the ledger and favorites.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{WatchError, WatchResult};
use crate::favorites::Favorites;
use crate::ledger::WatchLedger;

pub const WATCHTIME_FILE: &str = "watchtime.json";
pub const FAVORITES_FILE: &str = "favorites.json";

/// State directory holding `watchtime.json` and `favorites.json`.
#[derive(Debug, Clone)]
pub struct WatchStore {
    dir: PathBuf,
}

impl WatchStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The ledger, or an empty one when nothing has been saved yet.
    pub fn load_ledger(&self) -> WatchResult<WatchLedger> {
        self.load(WATCHTIME_FILE)
    }

    pub fn save_ledger(&self, ledger: &WatchLedger) -> WatchResult<()> {
        self.save(WATCHTIME_FILE, ledger)
    }

    pub fn load_favorites(&self) -> WatchResult<Favorites> {
        self.load(FAVORITES_FILE)
    }

    pub fn save_favorites(&self, favorites: &Favorites) -> WatchResult<()> {
        self.save(FAVORITES_FILE, favorites)
    }

    fn load<T: DeserializeOwned + Default>(&self, name: &str) -> WatchResult<T> {
        let path = self.dir.join(name);
        if !path.exists() {
            debug!(path = %path.display(), "No saved state");
            return Ok(T::default());
        }
        let text = fs::read_to_string(&path).map_err(|e| WatchError::io(&path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save<T: Serialize>(&self, name: &str, value: &T) -> WatchResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| WatchError::io(&self.dir, e))?;
        let path = self.dir.join(name);
        let text = serde_json::to_string_pretty(value)?;
        fs::write(&path, text).map_err(|e| WatchError::io(&path, e))?;
        debug!(path = %path.display(), "Saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::FavoriteMovie;
    use crate::ledger::WatchedMovie;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchStore::new(dir.path().join("state"));
        assert!(store.load_ledger().unwrap().is_empty());
        assert!(store.load_favorites().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = WatchStore::new(dir.path().join("state"));

        let mut ledger = WatchLedger::new();
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 20, 0, 0).unwrap();
        ledger.mark_watched(WatchedMovie::new("tt0133093", "The Matrix", "136 min", at));
        store.save_ledger(&ledger).unwrap();

        let mut favorites = Favorites::new();
        favorites.add(FavoriteMovie {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
        });
        store.save_favorites(&favorites).unwrap();

        assert_eq!(store.load_ledger().unwrap(), ledger);
        assert_eq!(store.load_favorites().unwrap(), favorites);
        assert!(dir.path().join("state").join(WATCHTIME_FILE).is_file());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(WATCHTIME_FILE), "{ not json").unwrap();
        let store = WatchStore::new(dir.path());
        assert!(matches!(store.load_ledger(), Err(WatchError::Json(_))));
    }
}
