//! System command runner
//!
//! Runs deploy commands with `std::process::Command`, without a shell.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::domain::ports::{CommandError, CommandRunner, CommandSpec};

/// Runs commands as child processes and waits for them
///
/// In quiet mode (NDJSON output) the child's stdout is discarded so it
/// cannot interleave with the event stream; stderr is always inherited.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    quiet: bool,
}

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn spawn(&self, program: &str, args: &[String]) -> io::Result<ExitStatus> {
        let stdout = if self.quiet {
            Stdio::null()
        } else {
            Stdio::inherit()
        };

        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
    }
}

/// Names to try when spawning `program`
///
/// On Windows, tools like `npm` are installed as `npm.cmd`, which
/// `Command` does not find from the bare name.
fn program_candidates(program: &str) -> Vec<String> {
    let mut candidates = vec![program.to_string()];
    if cfg!(windows) && Path::new(program).extension().is_none() {
        candidates.push(format!("{}.cmd", program));
    }
    candidates
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), CommandError> {
        let mut last_err = None;
        let mut status = None;

        for program in program_candidates(&command.program) {
            match self.spawn(&program, &command.args) {
                Ok(s) => {
                    status = Some(s);
                    break;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => last_err = Some(e),
                Err(e) => return Err(CommandError::Spawn(e.to_string())),
            }
        }

        let Some(status) = status else {
            let reason = last_err
                .map(|e| e.to_string())
                .unwrap_or_else(|| "program not found".to_string());
            return Err(CommandError::Spawn(reason));
        };

        if status.success() {
            Ok(())
        } else {
            Err(status
                .code()
                .map(CommandError::ExitCode)
                .unwrap_or(CommandError::Terminated))
        }
    }
}
