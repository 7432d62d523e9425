//! Generate command handler
//!
//! Scan, write `data.json`, then deploy if the user agrees.

use anyhow::Result;

use practice_log::application::{ExportUseCase, ScanOptions, ScanUseCase};
use practice_log::config::Config;
use practice_log::infrastructure::LocalFs;

use crate::cli::GenerateArgs;

use super::deploy::run_deploy;
use super::event_sink;
use super::prompt::{decide, DeployDecision};

/// Execute the generate command
///
/// A missing root is reported and produces an empty data file. Failing to
/// create the output directory or write the file is an error; the outcome
/// of the deployment never is.
pub fn cmd_generate(args: GenerateArgs, mut config: Config, json: bool, verbose: u8) -> Result<()> {
    if let Some(root) = args.paths.root {
        config.scan.root = root;
    }
    if let Some(dir) = args.paths.output_dir {
        config.output.dir = dir;
    }

    let sink = event_sink(json, verbose);

    let records = ScanUseCase::new(LocalFs::new())
        .execute_or_empty(&ScanOptions::from(&config.scan), sink.as_ref())?;

    let data_path =
        ExportUseCase::new(LocalFs::new()).execute(&records, &config.output, sink.as_ref())?;

    match decide(args.yes, args.no_deploy, json) {
        DeployDecision::Deploy => {
            run_deploy(
                &config.deploy,
                &data_path,
                args.dry_run,
                json,
                sink.as_ref(),
            );
        }
        DeployDecision::Skip => {
            if !json {
                println!("👌 Data saved locally, not deployed.");
            }
        }
    }

    Ok(())
}
