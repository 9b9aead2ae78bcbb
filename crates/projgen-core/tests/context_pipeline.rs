use chrono::NaiveDate;
use projgen_core::{
    GenerationContext, ProjectConfig, ProjectParameters, ProjectType, SkillLevel, StackPreset,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn context(topic: &str, duration: u32, stack: Option<&str>, project_type: ProjectType) -> GenerationContext {
    let params = ProjectParameters::new(
        topic,
        duration,
        SkillLevel::Beginner,
        "./out",
        stack.map(str::to_string),
        project_type,
    )
    .unwrap();
    GenerationContext::assemble(params, date())
}

#[test]
fn movie_topic_on_mobile() {
    let ctx = context("Film Night Planner", 8, None, ProjectType::MobileReactNative);

    assert_eq!(ctx.project_name, "film-night-planner");
    assert_eq!(ctx.profile().name, "movie");
    assert!(matches!(ctx.stack.preset, StackPreset::Mobile(_)));
    assert_eq!(ctx.api_env_var(), "EXPO_PUBLIC_OMDB_API_KEY");
    assert_eq!(ctx.sprints.labels(), vec!["1-2", "3-4", "5-6", "7-8"]);
}

#[test]
fn local_storage_topic_keeps_sentinel_source() {
    let ctx = context("Family Budget Tracker", 10, Some("nextjs"), ProjectType::WebSpa);

    assert_eq!(ctx.profile().name, "budget");
    assert!(!ctx.profile().has_external_source());
    assert_eq!(ctx.stack.preset.key(), "nextjs");
    assert_eq!(ctx.stack.api_integration.primary(), "localStorage");
}

#[test]
fn unmatched_topic_uses_generic_profile() {
    let ctx = context("Garden Planner", 30, Some("bogus"), ProjectType::DesktopElectron);

    assert!(ctx.domain.is_fallback());
    assert_eq!(ctx.profile().name, "generic");
    assert_eq!(ctx.stack.preset.key(), "react-vite");
    assert_eq!(ctx.sprints.max_sprint_len(), 8);
}

#[test]
fn context_serializes_for_json_output() {
    let ctx = context("Weather Now", 12, None, ProjectType::WebSpa);
    let json = serde_json::to_value(&ctx).unwrap();

    assert_eq!(json["project_name"], "weather-now");
    assert_eq!(json["domain"]["profile"]["name"], "weather");
    assert_eq!(json["stack"]["preset"]["kind"], "web");
    assert_eq!(json["stack"]["api_integration"]["kind"], "live_api");
    assert_eq!(json["generated_on"], "2025-01-06");
}

#[test]
fn config_file_feeds_parameters() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("projgen.toml"),
        "duration = 6\nskill_level = \"advanced\"\ntech_stack = \"svelte-vite\"\n",
    )
    .unwrap();

    let config = ProjectConfig::discover(dir.path()).unwrap();
    let params = ProjectParameters::new(
        "Book Club",
        config.duration_or_default(),
        config.skill_level_or_default(),
        config.output_or_default(),
        config.tech_stack.clone(),
        config.project_type_or_default(),
    )
    .unwrap();
    let ctx = GenerationContext::assemble(params, date());

    assert_eq!(ctx.params.skill_level, SkillLevel::Advanced);
    assert_eq!(ctx.stack.preset.key(), "svelte-vite");
    assert_eq!(ctx.sprints.labels(), vec!["1-2", "3", "4-5", "6"]);
}
