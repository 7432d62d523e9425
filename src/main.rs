//! practice-log CLI
//!
//! Usage: practice-log [OPTIONS] [COMMAND]
//!
//! Commands:
//!   generate  Scan, write the data file, then ask whether to deploy (default)
//!   scan      Print the records as JSON without writing anything
//!   deploy    Commit, push and publish the existing data file

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, GenerateArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    {
        Commands::Generate(args) => {
            commands::generate::cmd_generate(args, config, cli.json, cli.verbose)
        }
        Commands::Scan { root } => {
            commands::scan::cmd_scan(root, config, cli.json, cli.verbose)
        }
        Commands::Deploy {
            output_dir,
            dry_run,
        } => commands::deploy::cmd_deploy(output_dir, dry_run, config, cli.json, cli.verbose),
    }
}
