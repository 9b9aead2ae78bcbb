//! Flattened, template-ready view of a [`GenerationContext`].
//!
//! Tera fails on undefined variables and out-of-range indexes, so every
//! positional lookup the templates make is resolved here with an explicit
//! fallback, and every display form (capitalized titles, joined lists, day
//! labels) is computed once.

use serde::Serialize;

use projgen_core::domain::model::{data_source_signup_url, persona_description, why_reason};
use projgen_core::stack::model::{FolderEntry, StackDocs};
use projgen_core::{
    AccessibilityRequirements, ApiIntegration, GenerationContext, PerformanceTargets, StackPreset,
    UserStory,
};

use crate::facilitation::{self, MicroMilestoneDay, SprintView};

/// Stand-ins for core features a short profile does not provide.
const FEATURE_FALLBACKS: [&str; 4] = ["browse items", "view details", "favorites", "filtering"];

/// Number of features the templates address by position.
pub const LEAD_FEATURES: usize = FEATURE_FALLBACKS.len();

const USER_RANKS: [&str; 3] = ["Primary", "Secondary", "Tertiary"];
const FALLBACK_USER: &str = "general users";
const FALLBACK_MODEL: &str = "content";

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: &'static str,
    /// Every word capitalized.
    pub title: String,
    /// First letter capitalized.
    pub sentence: String,
}

impl Feature {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            title: capitalize_words(name),
            sentence: capitalize_first(name),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Persona {
    pub name: &'static str,
    pub title: String,
    pub rank: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Competitor {
    pub name: &'static str,
    pub pros: &'static str,
    pub cons: &'static str,
    pub why: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainView {
    pub name: &'static str,
    pub problem_context: &'static str,
    pub features: Vec<Feature>,
    /// Exactly [`LEAD_FEATURES`] entries, padded with fallbacks.
    pub lead: Vec<Feature>,
    /// Third and fourth real features, if any.
    pub later_features: Vec<Feature>,
    /// Real features after the first three.
    pub extra_features: Vec<Feature>,
    /// First three features, comma-joined.
    pub mvp_summary: String,
    /// First two features joined with "and".
    pub pair_summary: String,
    pub data_models: &'static [&'static str],
    pub primary_model: &'static str,
    pub users: Vec<Persona>,
    pub primary_user: &'static str,
    pub users_summary: String,
    pub lead_users_summary: String,
    pub pain_points: &'static [&'static str],
    pub competitors: Vec<Competitor>,
    pub data_source: &'static str,
    pub has_external_source: bool,
    pub signup_url: &'static str,
    pub user_stories: Vec<UserStory>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StackView {
    pub key: &'static str,
    pub name: &'static str,
    pub frontend: &'static str,
    pub bundler: &'static str,
    pub routing: &'static str,
    pub data_fetching: &'static str,
    pub styling: &'static str,
    pub testing: &'static str,
    pub icons: Option<&'static str>,
    pub storage: &'static str,
    pub deployment: &'static [&'static str],
    pub deployment_summary: String,
    pub setup_command: &'static str,
    pub package_manager: &'static str,
    pub dependencies: String,
    pub dev_dependencies: String,
    pub folders: &'static [FolderEntry],
    pub folder_paths: String,
    pub env_prefix: &'static str,
    pub dev_server_url: String,
    pub build_dir: &'static str,
    pub is_react: bool,
    pub is_mobile: bool,
    pub is_vite: bool,
    pub docs: &'static StackDocs,
}

/// Everything a document template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub topic: String,
    pub project_name: String,
    pub duration: u32,
    pub skill_level: &'static str,
    pub skill_level_title: String,
    pub project_type: &'static str,
    pub generated_on: String,
    pub generator_version: &'static str,
    pub domain: DomainView,
    pub stack: StackView,
    pub api: ApiIntegration,
    pub live_api: bool,
    /// Client-side variable holding the data source key.
    pub env_var: String,
    /// Key under which the generated app keeps its local data.
    pub storage_key: String,
    pub performance: PerformanceTargets,
    pub accessibility: AccessibilityRequirements,
    /// Always four entries, one per sprint.
    pub sprints: Vec<SprintView>,
    pub sprint_length: u32,
    pub micro_milestones: Vec<MicroMilestoneDay>,
}

impl DocumentView {
    pub fn from_context(ctx: &GenerationContext) -> Self {
        let domain = domain_view(ctx);
        let sprints = facilitation::sprint_views(ctx, &domain.lead);
        let micro_milestones = facilitation::micro_milestones(ctx, &domain.lead);

        Self {
            topic: ctx.params.topic.clone(),
            project_name: ctx.project_name.clone(),
            duration: ctx.params.duration,
            skill_level: ctx.params.skill_level.as_str(),
            skill_level_title: capitalize_first(ctx.params.skill_level.as_str()),
            project_type: ctx.params.project_type.as_str(),
            generated_on: ctx.date_string(),
            generator_version: env!("CARGO_PKG_VERSION"),
            stack: stack_view(&ctx.stack.preset),
            api: ctx.stack.api_integration,
            live_api: ctx.stack.api_integration.is_live(),
            env_var: ctx.api_env_var(),
            storage_key: format!("{}:data:v1", ctx.project_name),
            performance: ctx.stack.performance,
            accessibility: ctx.stack.accessibility,
            sprints,
            sprint_length: ctx.sprints.max_sprint_len(),
            micro_milestones,
            domain,
        }
    }
}

fn domain_view(ctx: &GenerationContext) -> DomainView {
    let profile = ctx.profile();

    let features: Vec<Feature> = profile.core_features.iter().copied().map(Feature::new).collect();
    let lead: Vec<Feature> = FEATURE_FALLBACKS
        .into_iter()
        .enumerate()
        .map(|(i, fallback)| Feature::new(pick(profile.core_features, i, fallback)))
        .collect();

    let users = profile
        .target_users
        .iter()
        .copied()
        .enumerate()
        .map(|(i, user)| Persona {
            name: user,
            title: capitalize_words(user),
            rank: USER_RANKS.get(i).copied().unwrap_or("Additional"),
            description: persona_description(user),
        })
        .collect();

    let competitors = profile
        .competing_solutions
        .iter()
        .map(|s| Competitor {
            name: s.name,
            pros: s.pros,
            cons: s.cons,
            why: why_reason(s.cons),
        })
        .collect();

    let data_source = profile.primary_data_source();

    DomainView {
        name: profile.name,
        problem_context: profile.problem_context,
        later_features: features.iter().skip(2).take(2).cloned().collect(),
        extra_features: features.iter().skip(3).cloned().collect(),
        mvp_summary: profile.core_features.iter().take(3).copied().collect::<Vec<_>>().join(", "),
        pair_summary: format!("{} and {}", lead[0].name, lead[1].name),
        features,
        lead,
        data_models: profile.data_models,
        primary_model: pick(profile.data_models, 0, FALLBACK_MODEL),
        users,
        primary_user: pick(profile.target_users, 0, FALLBACK_USER),
        users_summary: profile.target_users.join(", "),
        lead_users_summary: profile.target_users.iter().take(2).copied().collect::<Vec<_>>().join(", "),
        pain_points: profile.pain_points,
        competitors,
        data_source,
        has_external_source: profile.has_external_source(),
        signup_url: data_source_signup_url(data_source),
        user_stories: profile.user_stories(),
    }
}

fn stack_view(preset: &StackPreset) -> StackView {
    let folders = preset.folder_structure();
    let build_dir = match preset {
        StackPreset::Web(p) if p.bundler == "Vite" => "dist",
        StackPreset::Web(_) => ".next",
        StackPreset::Mobile(_) => "dist",
    };

    StackView {
        key: preset.key(),
        name: preset.name(),
        frontend: preset.frontend(),
        bundler: preset.bundler(),
        routing: preset.routing(),
        data_fetching: preset.data_fetching(),
        styling: preset.styling(),
        testing: preset.testing(),
        icons: preset.icons(),
        storage: preset.storage(),
        deployment: preset.deployment(),
        deployment_summary: preset.deployment().join(", "),
        setup_command: preset.setup_command(),
        package_manager: preset.package_manager(),
        dependencies: preset.dependencies().join(" "),
        dev_dependencies: preset.dev_dependencies().join(" "),
        folders,
        folder_paths: folders.iter().map(|f| f.path).collect::<Vec<_>>().join(" "),
        env_prefix: preset.env_prefix(),
        dev_server_url: preset.dev_server_url(),
        build_dir,
        is_react: preset.is_react(),
        is_mobile: preset.is_mobile(),
        is_vite: preset.bundler() == "Vite",
        docs: preset.docs(),
    }
}

/// Item `index` of `items`, or `fallback` when the list is too short.
pub fn pick(items: &[&'static str], index: usize, fallback: &'static str) -> &'static str {
    items.get(index).copied().unwrap_or(fallback)
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize the first letter of every space-separated word, leaving the
/// rest of each word untouched.
pub fn capitalize_words(s: &str) -> String {
    s.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}
