//! Watch-time ledger and the 40-hour break gate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Hours of watch time after which a break is suggested.
pub const BREAK_THRESHOLD_HOURS: f64 = 40.0;

/// Minutes in a runtime string such as `"120 min"`.
///
/// The first run of digits wins. `"N/A"`, empty strings and strings without
/// digits count as zero.
pub fn parse_runtime(runtime: &str) -> u32 {
    let digits: String = runtime
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedMovie {
    pub imdb_id: String,
    pub title: String,
    /// Runtime as reported by the catalog, e.g. `"142 min"`.
    pub runtime: String,
    pub runtime_minutes: u32,
    pub watched_at: DateTime<Utc>,
}

impl WatchedMovie {
    pub fn new(
        imdb_id: impl Into<String>,
        title: impl Into<String>,
        runtime: impl Into<String>,
        watched_at: DateTime<Utc>,
    ) -> Self {
        let runtime = runtime.into();
        Self {
            imdb_id: imdb_id.into(),
            title: title.into(),
            runtime_minutes: parse_runtime(&runtime),
            runtime,
            watched_at,
        }
    }
}

/// Movies marked as watched, in the order they were marked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchLedger {
    movies: Vec<WatchedMovie>,
}

impl WatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movie. Returns false when the id is already in the ledger.
    pub fn mark_watched(&mut self, movie: WatchedMovie) -> bool {
        if self.is_watched(&movie.imdb_id) {
            debug!(imdb_id = %movie.imdb_id, "Already watched");
            return false;
        }
        debug!(imdb_id = %movie.imdb_id, minutes = movie.runtime_minutes, "Marked watched");
        self.movies.push(movie);
        true
    }

    /// Remove a movie. Returns false when it was not in the ledger.
    pub fn unmark_watched(&mut self, imdb_id: &str) -> bool {
        let before = self.movies.len();
        self.movies.retain(|m| m.imdb_id != imdb_id);
        self.movies.len() != before
    }

    pub fn is_watched(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.imdb_id == imdb_id)
    }

    pub fn movies(&self) -> &[WatchedMovie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn total_minutes(&self) -> u32 {
        self.movies.iter().map(|m| m.runtime_minutes).sum()
    }

    /// Total hours rounded to one decimal.
    pub fn total_hours(&self) -> f64 {
        (f64::from(self.total_minutes()) / 60.0 * 10.0).round() / 10.0
    }

    /// Whole hours and leftover minutes.
    pub fn hours_minutes(&self) -> (u32, u32) {
        let total = self.total_minutes();
        (total / 60, total % 60)
    }

    /// Progress towards the break threshold, capped at 100.
    pub fn break_progress_percent(&self) -> f64 {
        (self.total_hours() / BREAK_THRESHOLD_HOURS * 100.0).min(100.0)
    }

    pub fn break_due(&self) -> bool {
        self.total_hours() >= BREAK_THRESHOLD_HOURS
    }

    pub fn hours_until_break(&self) -> f64 {
        (BREAK_THRESHOLD_HOURS - self.total_hours()).max(0.0)
    }

    /// Up to `limit` titles, most recently watched first.
    pub fn recent_titles(&self, limit: usize) -> Vec<&str> {
        self.movies
            .iter()
            .rev()
            .take(limit)
            .map(|m| m.title.as_str())
            .collect()
    }

    pub fn reset(&mut self) {
        self.movies.clear();
    }
}
