//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use projgen_core::ProjectConfig;

pub mod analyze;
pub mod catalog;
pub mod generate;
pub mod watch;

/// Projgen - educational project generator
#[derive(Parser)]
#[command(name = "projgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Config file (defaults to ./projgen.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a project curriculum
    Generate(generate::GenerateArgs),

    /// Inspect the domain and stack catalogs
    #[command(subcommand)]
    Catalog(catalog::CatalogCommands),

    /// Show how a topic resolves to a domain, stack and schedule
    Analyze(analyze::AnalyzeArgs),

    /// Movie watch-time tracker
    Watch(watch::WatchArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;

        match self.command {
            Commands::Generate(args) => generate::execute(args, &config),
            Commands::Catalog(cmd) => catalog::execute(cmd),
            Commands::Analyze(args) => analyze::execute(args, &config),
            Commands::Watch(args) => watch::execute(args, &config).await,
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<ProjectConfig> {
    match path {
        Some(path) => ProjectConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            ProjectConfig::discover(&cwd).context("Failed to load projgen.toml")
        }
    }
}
