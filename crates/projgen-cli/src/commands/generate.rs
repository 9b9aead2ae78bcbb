//! Project generation command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

use projgen_codegen::{write_documents, DocumentSet, Renderer};
use projgen_core::params::{MAX_DURATION, MIN_DURATION};
use projgen_core::stack::{AUTO_PRESET, WEB_STACKS};
use projgen_core::{GenerationContext, ProjectConfig, ProjectParameters, ProjectType, SkillLevel};

use crate::output;

#[derive(Args)]
pub struct GenerateArgs {
    /// Project topic, e.g. "Movie Finder"
    pub topic: Option<String>,

    /// Output directory
    #[arg(short, long, env = "PROJGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Stack preset (auto, react-vite, nextjs, vue-vite, svelte-vite)
    #[arg(short = 't', long, env = "PROJGEN_TECH_STACK")]
    pub tech_stack: Option<String>,

    /// Project length in days (1-30)
    #[arg(short, long, env = "PROJGEN_DURATION")]
    pub duration: Option<u32>,

    /// Student skill level (beginner, intermediate, advanced)
    #[arg(short, long, env = "PROJGEN_SKILL_LEVEL")]
    pub skill_level: Option<SkillLevel>,

    /// Project type (web-spa, web-fullstack, api-rest, mobile-react-native, desktop-electron)
    #[arg(long)]
    pub project_type: Option<ProjectType>,

    /// Never prompt; missing values come from config and defaults
    #[arg(long)]
    pub no_interactive: bool,

    /// List the documents without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: GenerateArgs, config: &ProjectConfig) -> Result<()> {
    let params = if args.no_interactive {
        resolve_flags(args_with_defaults(&args, config), args.topic.clone())?
    } else {
        prompt_missing(&args, config)?
    };

    let ctx = GenerationContext::assemble(params, chrono::Local::now().date_naive());
    output::print_context_summary(&ctx);

    let documents = render_documents(&ctx)?;

    let root = ctx.params.output_dir.clone();
    if args.dry_run {
        output::print_document_list(&documents, &root);
        return Ok(());
    }

    if !args.no_interactive && !confirm_overwrite(&root)? {
        println!("{}", "Aborted.".dimmed());
        return Ok(());
    }

    let written = write_project(&documents, &root)?;
    output::print_generation_done(&ctx, written.len(), &root);
    Ok(())
}

fn render_documents(ctx: &GenerationContext) -> Result<DocumentSet> {
    let bar = spinner("Rendering documents...")?;
    let documents = Renderer::new()
        .and_then(|renderer| renderer.render(ctx))
        .context("Failed to render documents")?;
    bar.finish_and_clear();
    Ok(documents)
}

fn write_project(documents: &DocumentSet, root: &Path) -> Result<Vec<PathBuf>> {
    let bar = spinner("Writing files...")?;
    let written = write_documents(documents, root)
        .with_context(|| format!("Failed to write project to {}", root.display()))?;
    bar.finish_and_clear();
    Ok(written)
}

/// Stack presets worth offering for a project type. Only single-page web
/// apps choose a framework; every other type is matched automatically.
fn stack_choices(project_type: ProjectType) -> Vec<&'static str> {
    let mut keys = vec![AUTO_PRESET];
    if project_type == ProjectType::WebSpa {
        keys.extend(WEB_STACKS.iter().map(|s| s.key));
    }
    keys
}

/// Flag values with config and built-in defaults filled in.
struct Resolved {
    output: PathBuf,
    tech_stack: Option<String>,
    duration: u32,
    skill_level: SkillLevel,
    project_type: ProjectType,
}

fn args_with_defaults(args: &GenerateArgs, config: &ProjectConfig) -> Resolved {
    Resolved {
        output: args.output.clone().unwrap_or_else(|| config.output_or_default()),
        tech_stack: args.tech_stack.clone().or_else(|| config.tech_stack.clone()),
        duration: args.duration.unwrap_or_else(|| config.duration_or_default()),
        skill_level: args.skill_level.unwrap_or_else(|| config.skill_level_or_default()),
        project_type: args.project_type.unwrap_or_else(|| config.project_type_or_default()),
    }
}

fn resolve_flags(resolved: Resolved, topic: Option<String>) -> Result<ProjectParameters> {
    let Some(topic) = topic else {
        bail!("A topic is required with --no-interactive");
    };
    Ok(ProjectParameters::new(
        &topic,
        resolved.duration,
        resolved.skill_level,
        resolved.output,
        resolved.tech_stack,
        resolved.project_type,
    )?)
}

fn prompt_missing(args: &GenerateArgs, config: &ProjectConfig) -> Result<ProjectParameters> {
    let defaults = args_with_defaults(args, config);
    println!("{}", "Answer a few questions (press Enter to accept the default):\n".dimmed());

    let topic = match &args.topic {
        Some(topic) => topic.clone(),
        None => Input::new()
            .with_prompt("Project topic")
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Topic cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .context("Failed to read topic")?,
    };

    let duration = match args.duration {
        Some(days) => days,
        None => Input::new()
            .with_prompt(format!("Duration in days ({}-{})", MIN_DURATION, MAX_DURATION))
            .default(defaults.duration)
            .validate_with(|days: &u32| {
                if (MIN_DURATION..=MAX_DURATION).contains(days) {
                    Ok(())
                } else {
                    Err("Duration must be between 1 and 30 days")
                }
            })
            .interact_text()
            .context("Failed to read duration")?,
    };

    let skill_level = match args.skill_level {
        Some(level) => level,
        None => {
            let labels: Vec<&str> = SkillLevel::ALL.iter().map(|l| l.describe()).collect();
            let default = SkillLevel::ALL
                .iter()
                .position(|l| *l == defaults.skill_level)
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("Skill level")
                .items(&labels)
                .default(default)
                .interact()
                .context("Failed to read skill level")?;
            SkillLevel::ALL[index]
        }
    };

    let project_type = match args.project_type {
        Some(kind) => kind,
        None => {
            let labels: Vec<&str> = ProjectType::ALL.iter().map(|t| t.describe()).collect();
            let default = ProjectType::ALL
                .iter()
                .position(|t| *t == defaults.project_type)
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("Project type")
                .items(&labels)
                .default(default)
                .interact()
                .context("Failed to read project type")?;
            ProjectType::ALL[index]
        }
    };

    let tech_stack = match &args.tech_stack {
        Some(stack) => Some(stack.clone()),
        None => {
            let keys = stack_choices(project_type);
            let default = defaults
                .tech_stack
                .as_deref()
                .and_then(|wanted| keys.iter().position(|k| *k == wanted))
                .unwrap_or(0);
            let index = Select::new()
                .with_prompt("Tech stack")
                .items(&keys)
                .default(default)
                .interact()
                .context("Failed to read tech stack")?;
            Some(keys[index].to_string())
        }
    };

    let output = match &args.output {
        Some(dir) => dir.clone(),
        None => {
            let dir: String = Input::new()
                .with_prompt("Output directory")
                .default(defaults.output.display().to_string())
                .interact_text()
                .context("Failed to read output directory")?;
            PathBuf::from(dir)
        }
    };
    println!();

    Ok(ProjectParameters::new(
        &topic,
        duration,
        skill_level,
        output,
        tech_stack,
        project_type,
    )?)
}

fn confirm_overwrite(root: &Path) -> Result<bool> {
    let occupied = std::fs::read_dir(root)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false);
    if !occupied {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(format!("{} is not empty. Overwrite generated files?", root.display()))
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

pub fn spinner(message: &'static str) -> Result<ProgressBar> {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(80));
    Ok(bar)
}
