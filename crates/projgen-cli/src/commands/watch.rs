//! Movie watch-time tracker commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use std::path::PathBuf;

use projgen_core::ProjectConfig;
use projgen_watch::{
    BreakAdvisor, ChatClient, FavoriteMovie, Location, OmdbClient, WatchStore, WatchedMovie,
};

use super::generate::spinner;
use crate::output;

/// State directory used when neither the flag nor the config names one.
const STATE_DIR_NAME: &str = "projgen";

#[derive(Args)]
pub struct WatchArgs {
    /// Directory holding watchtime.json and favorites.json
    #[arg(long, env = "PROJGEN_WATCH_DIR", global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: WatchCommands,
}

#[derive(Subcommand)]
pub enum WatchCommands {
    /// Mark a movie as watched
    Add(AddArgs),

    /// Remove a movie from the watched list
    Remove {
        /// IMDb id, e.g. tt0133093
        imdb_id: String,
    },

    /// List watched movies
    List,

    /// Show watch time and progress to the break milestone
    Stats,

    /// Clear the watched list
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Toggle a movie in favorites
    Favorite(FavoriteArgs),

    /// List favorite movies
    Favorites,

    /// Suggest places to take a break once 40 hours are reached
    Recommend(RecommendArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// IMDb id, e.g. tt0133093
    pub imdb_id: String,

    /// Title; with --runtime skips the OMDb lookup
    #[arg(long, requires = "runtime")]
    pub title: Option<String>,

    /// Runtime such as "136 min"
    #[arg(long, requires = "title")]
    pub runtime: Option<String>,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub omdb_key: Option<String>,
}

#[derive(Args)]
pub struct FavoriteArgs {
    /// IMDb id, e.g. tt0133093
    pub imdb_id: String,

    /// Title to store; looked up when omitted
    #[arg(long)]
    pub title: Option<String>,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub omdb_key: Option<String>,
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Latitude of your location
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of your location
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_key: Option<String>,
}

fn state_dir(flag: Option<PathBuf>, config: &ProjectConfig) -> PathBuf {
    flag.or_else(|| config.watch_dir.clone())
        .or_else(|| dirs::data_dir().map(|d| d.join(STATE_DIR_NAME)))
        .unwrap_or_else(|| PathBuf::from(".projgen"))
}

fn omdb_client(key: Option<&str>) -> Result<OmdbClient> {
    Ok(OmdbClient::new(
        projgen_watch::omdb::DEFAULT_OMDB_URL,
        key.unwrap_or_default(),
    )?)
}

pub async fn execute(args: WatchArgs, config: &ProjectConfig) -> Result<()> {
    let store = WatchStore::new(state_dir(args.dir, config));
    tracing::debug!(dir = %store.dir().display(), "Using watch state");

    match args.command {
        WatchCommands::Add(args) => {
            let mut ledger = store.load_ledger()?;
            let now = chrono::Utc::now();

            let movie = match (args.title, args.runtime) {
                (Some(title), Some(runtime)) => WatchedMovie::new(&args.imdb_id, title, runtime, now),
                _ => {
                    let client = omdb_client(args.omdb_key.as_deref())?;
                    let bar = spinner("Looking up movie...")?;
                    let found = client.movie_by_id(&args.imdb_id).await;
                    bar.finish_and_clear();
                    found.with_context(|| format!("Failed to look up {}", args.imdb_id))?.to_watched(now)
                }
            };

            let title = movie.title.clone();
            let runtime = movie.runtime.clone();
            if ledger.mark_watched(movie) {
                store.save_ledger(&ledger)?;
                println!("{} Watched: {} ({})", "✓".green().bold(), title.cyan(), runtime);
                println!("  Total: {:.1} hours", ledger.total_hours());
                if ledger.break_due() {
                    println!(
                        "  {} 40 hours reached. Run `projgen watch recommend --lat .. --lon ..`",
                        "🎉".bold()
                    );
                }
            } else {
                println!("{} {} is already marked as watched", "ℹ".blue().bold(), title);
            }
        }

        WatchCommands::Remove { imdb_id } => {
            let mut ledger = store.load_ledger()?;
            if ledger.unmark_watched(&imdb_id) {
                store.save_ledger(&ledger)?;
                println!("{} Removed {}", "✓".green().bold(), imdb_id);
            } else {
                println!("{} {} is not in the watched list", "ℹ".blue().bold(), imdb_id);
            }
        }

        WatchCommands::List => output::print_watched_table(&store.load_ledger()?),

        WatchCommands::Stats => output::print_watch_stats(&store.load_ledger()?),

        WatchCommands::Reset { yes } => {
            let mut ledger = store.load_ledger()?;
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!("Clear {} watched movie(s)?", ledger.len()))
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
            if confirmed {
                ledger.reset();
                store.save_ledger(&ledger)?;
                println!("{} Watch time reset", "✓".green().bold());
            }
        }

        WatchCommands::Favorite(args) => {
            let mut favorites = store.load_favorites()?;
            let known_title = match args.title.clone() {
                Some(title) => Some(title),
                None => watched_title(&store, &args.imdb_id)?,
            };

            let favorite = match known_title {
                Some(title) => FavoriteMovie {
                    imdb_id: args.imdb_id.clone(),
                    title,
                },
                // Removing never needs a lookup.
                None if favorites.contains(&args.imdb_id) => FavoriteMovie {
                    imdb_id: args.imdb_id.clone(),
                    title: String::new(),
                },
                None => {
                    let client = omdb_client(args.omdb_key.as_deref())?;
                    client
                        .movie_by_id(&args.imdb_id)
                        .await
                        .with_context(|| format!("Failed to look up {}", args.imdb_id))?
                        .to_favorite()
                }
            };

            let title = favorite.title.clone();
            if favorites.toggle(favorite) {
                println!("{} Added to favorites: {}", "♥".red().bold(), title.cyan());
            } else {
                println!("{} Removed {} from favorites", "✓".green().bold(), args.imdb_id);
            }
            store.save_favorites(&favorites)?;
        }

        WatchCommands::Favorites => output::print_favorites(&store.load_favorites()?),

        WatchCommands::Recommend(args) => {
            let ledger = store.load_ledger()?;
            projgen_watch::advisor::ensure_break_due(&ledger)?;

            let client = ChatClient::new(
                projgen_watch::chat::DEFAULT_CHAT_URL,
                args.openai_key.as_deref().unwrap_or_default(),
            )?;
            let advisor = BreakAdvisor::new(&client);
            let location = Location {
                latitude: args.lat,
                longitude: args.lon,
            };

            let bar = spinner("Asking for break ideas...")?;
            let result = advisor.recommend(&ledger, location).await;
            bar.finish_and_clear();
            let recommendation = result.context("Failed to get recommendations")?;

            println!("{}", "Time for a break!".bold());
            println!();
            println!("{}", recommendation.text);
            if let Some(usage) = recommendation.usage {
                println!();
                println!("{}", format!("{} tokens used", usage.total_tokens).dimmed());
            }
        }
    }

    Ok(())
}

/// Title of a movie already in the ledger.
fn watched_title(store: &WatchStore, imdb_id: &str) -> Result<Option<String>> {
    let ledger = store.load_ledger().context("Failed to load watch history")?;
    Ok(ledger
        .movies()
        .iter()
        .find(|m| m.imdb_id == imdb_id)
        .map(|m| m.title.clone()))
}
