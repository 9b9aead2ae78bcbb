//! # Projgen Watch
//!
//! Movie watch-time tracking: a ledger of watched movies with a 40-hour
//! break gate, favorites, JSON persistence, OMDb lookups and break
//! recommendations from a chat-completions API.

pub mod advisor;
pub mod chat;
pub mod error;
pub mod favorites;
pub mod ledger;
pub mod omdb;
pub mod store;

pub use advisor::{BreakAdvisor, Location, Recommendation};
pub use chat::{ChatClient, ChatCompletion, ChatMessage, ChatRequest};
pub use error::{WatchError, WatchResult};
pub use favorites::{FavoriteMovie, Favorites};
pub use ledger::{parse_runtime, WatchLedger, WatchedMovie, BREAK_THRESHOLD_HOURS};
pub use omdb::{OmdbClient, OmdbMovie};
pub use store::WatchStore;
