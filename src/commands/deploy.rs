//! Deploy command handler
//!
//! Commits, pushes and publishes an already generated data file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use practice_log::application::deploy::{DeployPlan, DeployReport, DeployUseCase};
use practice_log::application::parse_json;
use practice_log::config::{Config, DeployConfig};
use practice_log::domain::ports::{EventSink, FileSystem, FsError};
use practice_log::infrastructure::{LocalFs, SystemCommandRunner};

use super::event_sink;

/// Execute the deploy command
pub fn cmd_deploy(
    output_dir: Option<PathBuf>,
    dry_run: bool,
    mut config: Config,
    json: bool,
    verbose: u8,
) -> Result<()> {
    if let Some(dir) = output_dir {
        config.output.dir = dir;
    }

    let data_path = config.output.data_path();
    let content = match LocalFs::new().read(&data_path) {
        Ok(content) => content,
        Err(FsError::NotFound(_)) => anyhow::bail!(
            "Data file not found: {}. Run `practice-log` first to generate it.",
            data_path.display()
        ),
        Err(err) => return Err(err.into()),
    };
    parse_json(&content)
        .with_context(|| format!("Refusing to deploy invalid data file {}", data_path.display()))?;

    let sink = event_sink(json, verbose);
    if let Some(report) = run_deploy(&config.deploy, &data_path, dry_run, json, sink.as_ref()) {
        report.into_result()?;
    }

    Ok(())
}

/// Run (or with `dry_run`, print) the deploy plan for a data file
///
/// Returns `None` for a dry run.
pub fn run_deploy(
    config: &DeployConfig,
    data_path: &Path,
    dry_run: bool,
    json: bool,
    events: &dyn EventSink,
) -> Option<DeployReport> {
    let plan = DeployPlan::now(config, data_path);

    if dry_run {
        print_plan(&plan, json);
        return None;
    }

    let runner = SystemCommandRunner::new().quiet(json);
    Some(DeployUseCase::new(runner).execute(&plan, events))
}

fn print_plan(plan: &DeployPlan, json: bool) {
    if !json {
        println!("\n🚀 Deploy plan (dry run):");
    }

    for (i, planned) in plan.steps().iter().enumerate() {
        if json {
            let event = serde_json::json!({
                "event": "plan_step",
                "index": i,
                "step": planned.step.name(),
                "command": planned.command.to_string(),
                "soft": planned.step.is_soft(),
            });
            println!("{}", event);
        } else {
            let note = if planned.step.is_soft() {
                " (failure tolerated)"
            } else {
                ""
            };
            println!(
                "  {}. {:<8} {}{}",
                i + 1,
                planned.step.name(),
                planned.command,
                note
            );
        }
    }
}
