//! Domain profile types.

use serde::Serialize;

/// Sentinel data source meaning the project keeps everything in local storage.
pub const NO_EXTERNAL_SOURCE: &str = "No external API (local storage)";

/// An existing product the students compare their solution against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompetingSolution {
    pub name: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
}

/// A project domain from the fixed catalog.
///
/// Ordered lists are significant: templates prefer the first entries of
/// `core_features`, and `target_users` runs primary, secondary, tertiary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainProfile {
    pub name: &'static str,
    /// Matched as substrings of the lower-cased topic. Not used downstream.
    #[serde(skip)]
    pub keywords: &'static [&'static str],
    pub suggested_data_sources: &'static [&'static str],
    pub core_features: &'static [&'static str],
    pub data_models: &'static [&'static str],
    pub target_users: &'static [&'static str],
    pub problem_context: &'static str,
    pub pain_points: &'static [&'static str],
    pub competing_solutions: &'static [CompetingSolution],
}

/// A user story derived from a core feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStory {
    pub id: usize,
    pub story: String,
    pub priority: &'static str,
    pub milestone: u8,
}

impl DomainProfile {
    /// First suggested data source, or the local-storage sentinel.
    pub fn primary_data_source(&self) -> &'static str {
        self.suggested_data_sources
            .first()
            .copied()
            .unwrap_or(NO_EXTERNAL_SOURCE)
    }

    /// Whether the project talks to a live third-party API.
    pub fn has_external_source(&self) -> bool {
        self.primary_data_source() != NO_EXTERNAL_SOURCE
    }

    /// One user story per core feature, told from the primary persona's view.
    pub fn user_stories(&self) -> Vec<UserStory> {
        let persona = self.target_users.first().copied().unwrap_or("users");
        self.core_features
            .iter()
            .enumerate()
            .map(|(i, feature)| UserStory {
                id: i + 1,
                story: format!(
                    "As a {}, I want to {} so that I can find information quickly",
                    persona, feature
                ),
                priority: if i < 3 { "high" } else { "medium" },
                milestone: if i < 2 { 2 } else { 3 },
            })
            .collect()
    }
}

/// Longer description of a target-user persona, used in the problem statement.
pub fn persona_description(user: &str) -> &'static str {
    match user {
        "casual viewers" => "who want quick access to movie information without the overhead of complex applications",
        "film enthusiasts" => "who are passionate about movies and want to discover and organize their watchlist",
        "researchers" => "doing film-related projects who need quick access to movie data",
        "home cooks" => "who want to find and save recipes quickly without navigating cluttered websites",
        "food enthusiasts" => "who enjoy discovering new recipes and organizing their favorites",
        "meal planners" => "who need to plan weekly meals and grocery lists efficiently",
        "travelers" => "who need quick weather information for trip planning",
        "outdoor enthusiasts" => "who rely on accurate weather forecasts for activities",
        "general public" => "who need simple, fast access to weather information",
        "music lovers" => "who want to discover and organize their favorite tracks",
        "collectors" => "who maintain extensive music libraries and playlists",
        "casual listeners" => "who want simple music discovery without complex streaming services",
        "readers" => "who want to discover and track books without complex platforms",
        "students" => "who need to manage reading lists for courses",
        "book clubs" => "who coordinate reading schedules and discussions",
        "fitness enthusiasts" => "who want to track workouts and progress",
        "beginners" => "who are starting their fitness journey and need simple tools",
        "trainers" => "who create workout plans for clients",
        "budget-conscious users" => "who want to track spending without linking bank accounts",
        "families" => "who manage household budgets together",
        "professionals" => "who manage tasks and projects efficiently",
        "busy individuals" => "who need simple task management without complexity",
        _ => "who need this solution",
    }
}

/// Explain why a competing solution falls short, keyed on its weaknesses.
pub fn why_reason(cons: &str) -> &'static str {
    const REASONS: &[(&str, &str)] = &[
        ("requires login", "Creates unnecessary barriers to entry"),
        ("ad-heavy", "Prioritizes monetization over user experience"),
        ("slow", "Poor technical optimization"),
        ("complex", "Overwhelming feature set for casual users"),
        ("expensive", "Business model not aligned with target users"),
    ];

    let cons = cons.to_lowercase();
    REASONS
        .iter()
        .find(|(key, _)| cons.contains(key))
        .map(|(_, reason)| *reason)
        .unwrap_or("Not optimized for target user segment")
}

/// Sign-up page for a known data source.
pub fn data_source_signup_url(source: &str) -> &'static str {
    match source {
        "OMDb API" => "http://www.omdbapi.com/apikey.aspx",
        "TMDb API" => "https://www.themoviedb.org/settings/api",
        "Spoonacular API" => "https://spoonacular.com/food-api",
        "OpenWeather API" => "https://openweathermap.org/api",
        "Spotify API" => "https://developer.spotify.com/",
        "Google Books API" => "https://developers.google.com/books",
        "ExerciseDB API" => "https://rapidapi.com/justin-WFnsXH_t6/api/exercisedb",
        _ => "https://api-provider.com/signup",
    }
}
