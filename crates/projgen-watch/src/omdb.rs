//! OMDb HTTP client for movie lookups.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{WatchError, WatchResult};
use crate::favorites::FavoriteMovie;
use crate::ledger::WatchedMovie;

pub const DEFAULT_OMDB_URL: &str = "https://www.omdbapi.com/";

/// Environment variable read by [`OmdbClient::from_env`].
pub const OMDB_API_KEY_VAR: &str = "OMDB_API_KEY";

/// The subset of an OMDb record the tracker uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub genre: String,
}

impl OmdbMovie {
    pub fn to_watched(&self, watched_at: DateTime<Utc>) -> WatchedMovie {
        WatchedMovie::new(&self.imdb_id, &self.title, &self.runtime, watched_at)
    }

    pub fn to_favorite(&self) -> FavoriteMovie {
        FavoriteMovie {
            imdb_id: self.imdb_id.clone(),
            title: self.title.clone(),
        }
    }
}

/// Decode an OMDb response body. OMDb answers lookups of unknown ids with
/// HTTP 200 and `"Response": "False"`.
pub fn parse_movie(id: &str, body: Value) -> WatchResult<OmdbMovie> {
    if body.get("Response").and_then(Value::as_str) == Some("False") {
        let reason = body
            .get("Error")
            .and_then(Value::as_str)
            .unwrap_or("Movie not found!");
        return Err(WatchError::MovieNotFound(format!("{id}: {reason}")));
    }
    Ok(serde_json::from_value(body)?)
}

#[derive(Clone)]
pub struct OmdbClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> WatchResult<Self> {
        if api_key.trim().is_empty() {
            return Err(WatchError::MissingApiKey(OMDB_API_KEY_VAR));
        }
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    /// Client for the public endpoint keyed by `OMDB_API_KEY`.
    pub fn from_env() -> WatchResult<Self> {
        let key = std::env::var(OMDB_API_KEY_VAR).unwrap_or_default();
        Self::new(DEFAULT_OMDB_URL, &key)
    }

    pub async fn movie_by_id(&self, imdb_id: &str) -> WatchResult<OmdbMovie> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("i", imdb_id), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WatchError::api(format!("OMDb returned {}", response.status())));
        }

        let body: Value = response.json().await?;
        let movie = parse_movie(imdb_id, body)?;
        debug!(imdb_id = %movie.imdb_id, runtime = %movie.runtime, "Fetched movie");
        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_found() {
        let body = json!({
            "Title": "Inception",
            "Year": "2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "imdbID": "tt1375666",
            "Response": "True"
        });
        let movie = parse_movie("tt1375666", body).unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.to_watched(Utc::now()).runtime_minutes, 148);
    }

    #[test]
    fn test_parse_not_found() {
        let body = json!({ "Response": "False", "Error": "Incorrect IMDb ID." });
        match parse_movie("tt0", body) {
            Err(WatchError::MovieNotFound(msg)) => assert_eq!(msg, "tt0: Incorrect IMDb ID."),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key() {
        assert!(matches!(
            OmdbClient::new(DEFAULT_OMDB_URL, " "),
            Err(WatchError::MissingApiKey(OMDB_API_KEY_VAR))
        ));
    }
}
