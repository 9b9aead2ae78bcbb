//! Favorite movies.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteMovie {
    pub imdb_id: String,
    pub title: String,
}

/// Favorites in the order they were added, unique by IMDb id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    items: Vec<FavoriteMovie>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the movie is already a favorite.
    pub fn add(&mut self, movie: FavoriteMovie) -> bool {
        if self.contains(&movie.imdb_id) {
            return false;
        }
        self.items.push(movie);
        true
    }

    pub fn remove(&mut self, imdb_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.imdb_id != imdb_id);
        self.items.len() != before
    }

    /// Add or remove. Returns whether the movie is a favorite afterwards.
    pub fn toggle(&mut self, movie: FavoriteMovie) -> bool {
        if self.remove(&movie.imdb_id) {
            false
        } else {
            self.items.push(movie);
            true
        }
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.items.iter().any(|m| m.imdb_id == imdb_id)
    }

    pub fn list(&self) -> &[FavoriteMovie] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
