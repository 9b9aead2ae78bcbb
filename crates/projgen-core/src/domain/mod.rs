//! Domain catalog and topic matching.
//!
//! A topic is lower-cased and scored against every catalog entry by counting
//! how many of the entry's keywords occur in it as substrings. The entry with
//! the strictly highest non-zero score wins. Entries are visited in
//! declaration order and a later entry must beat the current best outright,
//! so equal scores resolve to the entry declared first. With no keyword hits
//! the [`GENERIC`] profile is returned.

pub mod model;

use model::{CompetingSolution, DomainProfile, NO_EXTERNAL_SOURCE};
use serde::Serialize;
use tracing::debug;

const GENERIC_SOLUTIONS: &[CompetingSolution] = &[
    CompetingSolution { name: "Existing Solution 1", pros: "Established brand", cons: "Complex, requires account" },
    CompetingSolution { name: "Existing Solution 2", pros: "Feature-rich", cons: "Expensive, steep learning curve" },
    CompetingSolution { name: "Manual methods", pros: "Simple", cons: "Time-consuming, error-prone" },
];

/// Fallback profile for topics that match no catalog keyword.
pub static GENERIC: DomainProfile = DomainProfile {
    name: "generic",
    keywords: &[],
    suggested_data_sources: &["Custom API or localStorage"],
    core_features: &["search/browse", "details view", "favorites", "filtering", "sorting"],
    data_models: &["Item", "Collection"],
    target_users: &["general users", "enthusiasts"],
    problem_context: "Users need a streamlined way to access and organize information without the complexity of existing solutions.",
    pain_points: &[
        "Current solutions are complex and overwhelming",
        "Require unnecessary account creation",
        "Poor mobile experiences",
        "Information is fragmented across multiple sources",
    ],
    competing_solutions: GENERIC_SOLUTIONS,
};

/// All matchable domains, in tie-break order.
pub static CATALOG: &[DomainProfile] = &[
    DomainProfile {
        name: "movie",
        keywords: &["movie", "film", "cinema", "video"],
        suggested_data_sources: &["OMDb API", "TMDb API", "MovieDB"],
        core_features: &["search", "details", "favorites", "ratings", "reviews"],
        data_models: &["Movie", "Search", "Favorite"],
        target_users: &["casual viewers", "film enthusiasts", "researchers"],
        problem_context: "Users are overwhelmed by fragmented movie information across multiple streaming platforms and websites, with poor mobile experiences and no simple way to save movies for later.",
        pain_points: &[
            "Many movie websites are cluttered with ads, slow to load, or require registration",
            "Mobile experiences are often poor with difficult navigation and tiny text",
            "Users lose track of movies they want to watch because there's no simple way to bookmark them",
            "Information is scattered across multiple sites and platforms",
        ],
        competing_solutions: &[
            CompetingSolution { name: "IMDb App", pros: "Comprehensive data", cons: "Requires login, ad-heavy, slow" },
            CompetingSolution { name: "Just Watch", pros: "Clean UI", cons: "Requires account for favorites" },
            CompetingSolution { name: "Google Search", pros: "Fast, no registration", cons: "No favorites or organization" },
        ],
    },
    DomainProfile {
        name: "recipe",
        keywords: &["recipe", "food", "cooking", "meal"],
        suggested_data_sources: &["Spoonacular API", "Edamam API", "TheMealDB"],
        core_features: &["search recipes", "ingredients", "favorites", "nutrition", "instructions"],
        data_models: &["Recipe", "Ingredient", "Nutrition"],
        target_users: &["home cooks", "food enthusiasts", "meal planners"],
        problem_context: "Home cooks struggle to find reliable recipes quickly, with information scattered across blogs with ads, pop-ups, and long backstories before the actual recipe.",
        pain_points: &[
            "Recipe websites have excessive ads and pop-ups before showing the actual recipe",
            "Long personal stories and backstories before the recipe content",
            "Inconsistent formatting makes it hard to follow instructions",
            "No simple way to save favorite recipes without creating accounts",
        ],
        competing_solutions: &[
            CompetingSolution { name: "AllRecipes", pros: "Large database", cons: "Cluttered with ads, slow mobile" },
            CompetingSolution { name: "Food blogs", pros: "Detailed content", cons: "Long intros, inconsistent format" },
            CompetingSolution { name: "Pinterest", pros: "Visual discovery", cons: "Links often broken, requires account" },
        ],
    },
    DomainProfile {
        name: "weather",
        keywords: &["weather", "forecast", "temperature", "climate"],
        suggested_data_sources: &["OpenWeather API", "WeatherAPI", "AccuWeather"],
        core_features: &["current weather", "forecast", "location search", "favorites", "alerts"],
        data_models: &["Weather", "Forecast", "Location"],
        target_users: &["travelers", "outdoor enthusiasts", "general public"],
        problem_context: "Users need quick, accurate weather information without downloading heavy apps or navigating ad-filled websites.",
        pain_points: &[
            "Weather apps are often heavy and slow to load",
            "Excessive notifications and permission requests",
            "Ad-heavy interfaces clutter the important information",
            "Complicated interfaces for simple weather queries",
        ],
        competing_solutions: &[
            CompetingSolution { name: "Weather.com", pros: "Accurate data", cons: "Ad-heavy, cluttered interface" },
            CompetingSolution { name: "Native weather apps", pros: "Pre-installed", cons: "Basic features, limited data" },
            CompetingSolution { name: "Weather Channel app", pros: "Detailed forecasts", cons: "Heavy app, notifications" },
        ],
    },
    DomainProfile {
        name: "music",
        keywords: &["music", "song", "artist", "album", "playlist"],
        suggested_data_sources: &["Spotify API", "Last.fm API", "iTunes API"],
        core_features: &["search tracks", "artist info", "playlists", "favorites", "recommendations"],
        data_models: &["Track", "Artist", "Album", "Playlist"],
        target_users: &["music lovers", "collectors", "casual listeners"],
        problem_context: "Music lovers want to discover and organize their favorite tracks without the complexity of full streaming services.",
        pain_points: &[
            "Full streaming services are too complex for casual listening",
            "Difficulty discovering new music without algorithm recommendations",
            "No simple way to organize favorite tracks",
            "Heavy apps consume device storage",
        ],
        competing_solutions: &[
            CompetingSolution { name: "Spotify", pros: "Huge catalog", cons: "Complex interface, requires account" },
            CompetingSolution { name: "Last.fm", pros: "Listening history", cons: "Dated, slow interface" },
            CompetingSolution { name: "Manual playlists", pros: "Full control", cons: "Time-consuming, error-prone" },
        ],
    },
    DomainProfile {
        name: "book",
        keywords: &["book", "library", "reading", "literature"],
        suggested_data_sources: &["Google Books API", "Open Library API", "GoodReads"],
        core_features: &["search books", "details", "favorites", "reading list", "reviews"],
        data_models: &["Book", "Author", "Review"],
        target_users: &["readers", "students", "book clubs"],
        problem_context: "Readers need a simple way to discover, track, and organize books they want to read without creating complex accounts.",
        pain_points: &[
            "Book discovery platforms require complex account setup",
            "Reading lists are often locked behind paywalls",
            "Information scattered across multiple book databases",
            "Difficult to track reading progress across devices",
        ],
        competing_solutions: &[
            CompetingSolution { name: "Goodreads", pros: "Large community", cons: "Requires login, ad-heavy" },
            CompetingSolution { name: "Library catalogs", pros: "Free access", cons: "Complex search, slow" },
            CompetingSolution { name: "Spreadsheets", pros: "Flexible", cons: "Time-consuming, error-prone" },
        ],
    },
    DomainProfile {
        name: "fitness",
        keywords: &["fitness", "exercise", "workout", "health", "gym"],
        suggested_data_sources: &["ExerciseDB API", "Nutritionix API", "Wger API"],
        core_features: &["exercise library", "workout plans", "tracking", "goals", "progress"],
        data_models: &["Exercise", "Workout", "Progress"],
        target_users: &["fitness enthusiasts", "beginners", "trainers"],
        problem_context: "Fitness enthusiasts lack simple tools to track workouts and progress without expensive subscriptions or complex apps.",
        pain_points: &[
            "Fitness apps require expensive subscriptions",
            "Complex interfaces overwhelming for beginners",
            "Privacy concerns with health data tracking",
            "No simple way to log workouts without extensive setup",
        ],
        competing_solutions: &[
            CompetingSolution { name: "MyFitnessPal", pros: "Detailed tracking", cons: "Expensive premium tier, ad-heavy" },
            CompetingSolution { name: "Gym apps", pros: "Guided programs", cons: "Complex setup, requires account" },
            CompetingSolution { name: "Paper logs", pros: "Simple", cons: "Time-consuming, error-prone" },
        ],
    },
    DomainProfile {
        name: "budget",
        keywords: &["budget", "expense", "finance", "money", "spending"],
        suggested_data_sources: &[NO_EXTERNAL_SOURCE, "Plaid API (optional)"],
        core_features: &["add transactions", "categories", "charts", "budget limits", "export"],
        data_models: &["Transaction", "Category", "Budget"],
        target_users: &["budget-conscious users", "students", "families"],
        problem_context: "People need straightforward expense tracking without linking bank accounts or complex financial software.",
        pain_points: &[
            "Finance apps require linking bank accounts (privacy concerns)",
            "Complex features overwhelming for simple expense tracking",
            "Subscription fees for basic budgeting tools",
            "Difficult to get started without financial expertise",
        ],
        competing_solutions: &[
            CompetingSolution { name: "Mint", pros: "Automatic imports", cons: "Requires login, bank linking" },
            CompetingSolution { name: "YNAB", pros: "Proven method", cons: "Expensive subscription" },
            CompetingSolution { name: "Spreadsheets", pros: "Flexible", cons: "Time-consuming, error-prone" },
        ],
    },
    DomainProfile {
        name: "todo",
        keywords: &["todo", "task", "checklist", "productivity"],
        suggested_data_sources: &[NO_EXTERNAL_SOURCE],
        core_features: &["add tasks", "categories", "due dates", "priorities", "filters"],
        data_models: &["Task", "Category", "Tag"],
        target_users: &["professionals", "students", "busy individuals"],
        problem_context: "Users need simple task management without the overhead of enterprise project management tools.",
        pain_points: &[
            "Project management tools are too complex for personal tasks",
            "Excessive features create overwhelming interfaces",
            "Syncing issues across devices",
            "Requires account creation for simple task lists",
        ],
        competing_solutions: &[
            CompetingSolution { name: "Jira", pros: "Powerful workflows", cons: "Complex, built for teams" },
            CompetingSolution { name: "Todoist", pros: "Polished apps", cons: "Requires account, paid features" },
            CompetingSolution { name: "Sticky notes", pros: "Simple", cons: "Easy to lose, no reminders" },
        ],
    },
];

/// Outcome of matching a topic against the catalog.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DomainMatch {
    pub profile: &'static DomainProfile,
    /// Number of keywords found in the topic; zero for the generic fallback.
    pub score: usize,
}

impl DomainMatch {
    pub fn is_fallback(&self) -> bool {
        self.score == 0
    }
}

/// Count how many of a profile's keywords occur in an already lower-cased topic.
fn keyword_score(profile: &DomainProfile, topic_lower: &str) -> usize {
    profile
        .keywords
        .iter()
        .filter(|keyword| topic_lower.contains(*keyword))
        .count()
}

/// Score a topic against the catalog and pick the best domain.
pub fn match_domain(topic: &str) -> DomainMatch {
    let topic_lower = topic.to_lowercase();

    let mut best = DomainMatch { profile: &GENERIC, score: 0 };
    for profile in CATALOG {
        let score = keyword_score(profile, &topic_lower);
        debug!(domain = profile.name, score, "Scored domain");
        if score > best.score {
            best = DomainMatch { profile, score };
        }
    }

    debug!(domain = best.profile.name, score = best.score, "Selected domain");
    best
}

/// Convenience wrapper returning only the selected profile.
pub fn match_profile(topic: &str) -> &'static DomainProfile {
    match_domain(topic).profile
}

/// Look up a catalog entry (or the generic profile) by name.
pub fn find_profile(name: &str) -> Option<&'static DomainProfile> {
    if name == GENERIC.name {
        return Some(&GENERIC);
    }
    CATALOG.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword_match() {
        let m = match_domain("Recipe Sharing App");
        assert_eq!(m.profile.name, "recipe");
        assert_eq!(m.score, 1);
    }

    #[test]
    fn test_every_keyword_selects_its_domain() {
        for profile in CATALOG {
            for keyword in profile.keywords {
                let topic = format!("My {} Project", keyword.to_uppercase());
                let m = match_domain(&topic);
                assert!(m.score >= 1, "no match for keyword {}", keyword);
                assert_eq!(
                    match_profile(&topic).name,
                    profile.name,
                    "keyword {} matched the wrong domain",
                    keyword
                );
            }
        }
    }

    #[test]
    fn test_higher_score_wins_over_declaration_order() {
        // movie: "movie" (1); music: "music", "playlist" (2)
        let m = match_domain("movie music playlist");
        assert_eq!(m.profile.name, "music");
        assert_eq!(m.score, 2);
    }

    #[test]
    fn test_tie_resolves_to_first_declared() {
        // movie and recipe both score 1; movie is declared first.
        assert_eq!(match_profile("food movie").name, "movie");
        assert_eq!(match_profile("movie food").name, "movie");
        // weather precedes budget.
        assert_eq!(match_profile("money forecast").name, "weather");
    }

    #[test]
    fn test_no_match_falls_back_to_generic() {
        let m = match_domain("Quantum Garden Planner");
        assert!(m.is_fallback());
        assert_eq!(m.profile.name, "generic");
        assert_eq!(match_profile("").name, "generic");
    }

    #[test]
    fn test_local_storage_domains() {
        assert!(!find_profile("todo").unwrap().has_external_source());
        assert!(!find_profile("budget").unwrap().has_external_source());
        assert!(find_profile("movie").unwrap().has_external_source());
        assert!(GENERIC.has_external_source());
    }

    #[test]
    fn test_user_stories() {
        let stories = find_profile("recipe").unwrap().user_stories();
        assert_eq!(stories.len(), 5);
        assert_eq!(
            stories[0].story,
            "As a home cooks, I want to search recipes so that I can find information quickly"
        );
        assert_eq!(stories[2].priority, "high");
        assert_eq!(stories[3].priority, "medium");
        assert_eq!(stories[1].milestone, 2);
        assert_eq!(stories[2].milestone, 3);
    }

    #[test]
    fn test_catalog_profiles_are_complete() {
        for profile in CATALOG.iter().chain(std::iter::once(&GENERIC)) {
            assert!(!profile.suggested_data_sources.is_empty(), "{}", profile.name);
            assert!(profile.core_features.len() >= 4, "{}", profile.name);
            assert!(!profile.target_users.is_empty(), "{}", profile.name);
            assert_eq!(profile.pain_points.len(), 4, "{}", profile.name);
            assert_eq!(profile.competing_solutions.len(), 3, "{}", profile.name);
        }
    }
}
