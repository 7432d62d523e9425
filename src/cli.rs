use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// practice-log - turn daily practice folders into the site's data.json
#[derive(Parser, Debug)]
#[command(name = "practice-log")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'practice-log' without a subcommand to generate and optionally deploy.")]
pub struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./practice-log.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Overrides for the scan and output paths
#[derive(Args, Debug, Clone, Default)]
pub struct PathArgs {
    /// Directory holding the dated problem folders
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Directory the data file is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Deploy without asking
    #[arg(short, long, conflicts_with = "no_deploy")]
    pub yes: bool,

    /// Write the data file and stop
    #[arg(long)]
    pub no_deploy: bool,

    /// Show the deploy commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan, write the data file, then ask whether to deploy (default)
    Generate(GenerateArgs),

    /// Scan and print the records as JSON without writing anything
    Scan {
        /// Directory holding the dated problem folders
        #[arg(short, long)]
        root: Option<PathBuf>,
    },

    /// Commit, push and publish the existing data file
    Deploy {
        /// Directory the data file lives in
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Show the deploy commands instead of running them
        #[arg(long)]
        dry_run: bool,
    },
}
