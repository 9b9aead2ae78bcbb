//! Catalog inspection commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use projgen_core::domain::{CATALOG, GENERIC};
use projgen_core::stack::{MOBILE_STACK, WEB_STACKS};

use crate::output;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List domain profiles
    Domains(CatalogArgs),

    /// List stack presets
    Stacks(CatalogArgs),
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(cmd: CatalogCommands) -> Result<()> {
    match cmd {
        CatalogCommands::Domains(args) => {
            if args.json {
                let mut profiles: Vec<_> = CATALOG.iter().collect();
                profiles.push(&GENERIC);
                println!("{}", serde_json::to_string_pretty(&profiles)?);
            } else {
                output::print_domains_table(CATALOG);
            }
        }

        CatalogCommands::Stacks(args) => {
            if args.json {
                let stacks = serde_json::json!({
                    "web": WEB_STACKS,
                    "mobile": &MOBILE_STACK,
                });
                println!("{}", serde_json::to_string_pretty(&stacks)?);
            } else {
                output::print_stacks_table(WEB_STACKS, &MOBILE_STACK);
            }
        }
    }

    Ok(())
}
