//! Topic analysis command.

use anyhow::Result;
use clap::Args;

use projgen_core::{GenerationContext, ProjectConfig, ProjectParameters, ProjectType};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Project topic to resolve
    pub topic: String,

    /// Stack preset
    #[arg(short = 't', long, env = "PROJGEN_TECH_STACK")]
    pub tech_stack: Option<String>,

    /// Project length in days (1-30)
    #[arg(short, long, env = "PROJGEN_DURATION")]
    pub duration: Option<u32>,

    /// Project type
    #[arg(long)]
    pub project_type: Option<ProjectType>,

    /// Print the full context as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs, config: &ProjectConfig) -> Result<()> {
    let params = ProjectParameters::new(
        &args.topic,
        args.duration.unwrap_or_else(|| config.duration_or_default()),
        config.skill_level_or_default(),
        config.output_or_default(),
        args.tech_stack.or_else(|| config.tech_stack.clone()),
        args.project_type.unwrap_or_else(|| config.project_type_or_default()),
    )?;
    let ctx = GenerationContext::assemble(params, chrono::Local::now().date_naive());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
    } else {
        output::print_analysis(&ctx);
    }
    Ok(())
}
