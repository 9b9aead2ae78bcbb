use chrono::NaiveDate;
use projgen_codegen::facilitation::days_label;
use projgen_codegen::{render, write_documents, Renderer, EMPTY_DIRS};
use projgen_core::{GenerationContext, ProjectParameters, ProjectType, SkillLevel};

const TOPICS: &[&str] = &[
    "Movie Finder",
    "Recipe Box",
    "Weather Dashboard",
    "Music Playlist Builder",
    "Book Club Tracker",
    "Workout Log",
    "Budget Planner",
    "Todo Checklist",
    "Garden Planner",
];

const STACKS: &[&str] = &["auto", "react-vite", "nextjs", "vue-vite", "svelte-vite"];

fn context(topic: &str, duration: u32, stack: &str, project_type: ProjectType) -> GenerationContext {
    let params = ProjectParameters::new(
        topic,
        duration,
        SkillLevel::Beginner,
        "./out",
        Some(stack.to_string()),
        project_type,
    )
    .unwrap();
    GenerationContext::assemble(params, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
}

#[test]
fn every_combination_renders_cleanly() {
    let renderer = Renderer::new().unwrap();
    for topic in TOPICS {
        for stack in STACKS {
            for project_type in ProjectType::ALL {
                let ctx = context(topic, 10, stack, project_type);
                let docs = renderer
                    .render(&ctx)
                    .unwrap_or_else(|e| panic!("{topic} / {stack} / {project_type}: {e:?}"));

                assert_eq!(docs.len(), 25);
                for (path, text) in docs.iter() {
                    assert!(!text.trim().is_empty(), "{path} is empty");
                    assert!(!text.contains("{{"), "{path} has an unrendered expression");
                    assert!(!text.contains("{%"), "{path} has an unrendered tag");
                }
            }
        }
    }
}

#[test]
fn day_ranges_agree_across_documents() {
    for duration in [1, 2, 5, 10, 17, 30] {
        let ctx = context("Movie Finder", duration, "react-vite", ProjectType::WebSpa);
        let docs = render(&ctx).unwrap();

        for (i, range) in ctx.sprints.ranges().iter().enumerate() {
            let label = days_label(range);
            let milestone = format!("milestone/Milestone{}/m{}.md", i + 1, i + 1);
            for path in [
                "TODO.md",
                "01-project-scope.md",
                "facilitation-guide/project-schedule.md",
                milestone.as_str(),
            ] {
                let text = docs.get(path).unwrap();
                assert!(
                    text.contains(&label),
                    "duration {duration}: {path} is missing {label:?} for sprint {}",
                    i + 1
                );
            }
        }
    }
}

#[test]
fn ten_day_schedule_uses_quarter_cuts() {
    let ctx = context("Movie Finder", 10, "react-vite", ProjectType::WebSpa);
    let docs = render(&ctx).unwrap();

    let scope = docs.get("01-project-scope.md").unwrap();
    assert!(scope.contains("4 sprints of up to 3 days:"));
    assert!(!scope.contains("3-day sprints"));
    assert!(scope.contains("(Days 1-3)"));
    assert!(scope.contains("(Days 9-10)"));

    let schedule = docs.get("facilitation-guide/project-schedule.md").unwrap();
    assert!(schedule.contains("- **Day 4:** API service layer"));
    assert!(schedule.contains("- **Day 10:**"));
    assert!(!schedule.contains("- **Day 11:**"));
}

#[test]
fn live_api_documents_name_the_env_var() {
    let ctx = context("Film Night", 8, "auto", ProjectType::MobileReactNative);
    let docs = render(&ctx).unwrap();

    let setup = docs.get("04-SETUP_INSTRUCTIONS.md").unwrap();
    assert!(setup.contains("EXPO_PUBLIC_OMDB_API_KEY=your_api_key_here"));
    assert!(setup.contains("Expo Go"));

    let m1 = docs.get("milestone/Milestone1/m1.md").unwrap();
    assert!(m1.contains("EXPO_PUBLIC_OMDB_API_KEY"));
    assert!(!m1.contains("mkdir -p"));
}

#[test]
fn local_storage_documents_use_storage_key() {
    let ctx = context("Budget Planner", 10, "vue-vite", ProjectType::WebSpa);
    let docs = render(&ctx).unwrap();

    let claude = docs.get("CLAUDE.md").unwrap();
    assert!(claude.contains("`budget-planner:data:v1`"));
    assert!(!claude.contains("Primary API"));

    let start = docs.get("start_here.md").unwrap();
    assert!(start.contains("budget-planner:data:v1"));
    assert!(!start.contains("Sign up"));
}

#[test]
fn competitors_and_users_reach_the_scope() {
    let ctx = context("Movie Finder", 10, "react-vite", ProjectType::WebSpa);
    let docs = render(&ctx).unwrap();

    let scope = docs.get("01-project-scope.md").unwrap();
    assert!(scope.contains("- **Primary:** Casual Viewers"));
    assert!(scope.contains("✅"));
    assert!(scope.contains("❌"));

    let problem = docs.get("00-problem.md").unwrap();
    assert!(problem.contains("**Casual Viewers:**"));
}

#[test]
fn writes_full_tree() {
    let ctx = context("Recipe Box", 10, "react-vite", ProjectType::WebSpa);
    let docs = render(&ctx).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("recipe-box");
    let written = write_documents(&docs, &root).unwrap();

    assert_eq!(written.len(), 25);
    assert!(written.iter().all(|p| p.is_file()));
    for empty in EMPTY_DIRS {
        assert!(root.join(empty).is_dir());
    }
    assert!(root.join(".gitignore").is_file());
    assert!(root.join("milestone/Milestone4/m4.md").is_file());

    // Second run overwrites in place.
    let again = write_documents(&docs, &root).unwrap();
    assert_eq!(again, written);
}
