//! CommandRunner port - runs external programs for deployment
//!
//! The deploy use case only sees this trait, so tests can record commands
//! instead of invoking `git` and `npm`.

use thiserror::Error;

/// A program plus its arguments, run without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Why a command did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The program could not be started
    #[error("failed to start: {0}")]
    Spawn(String),
    /// The program exited with a non-zero status
    #[error("exit code {0}")]
    ExitCode(i32),
    /// The program was killed by a signal
    #[error("terminated by signal")]
    Terminated,
}

/// Runs external commands, blocking until they exit
pub trait CommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), CommandError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_arguments_with_spaces() {
        let cmd = CommandSpec::new(
            "git",
            ["commit", "-m", "Auto update data: 2025-03-05 10:00:00"],
        );
        assert_eq!(
            cmd.to_string(),
            r#"git commit -m "Auto update data: 2025-03-05 10:00:00""#
        );
    }

    #[test]
    fn display_plain_arguments() {
        let cmd = CommandSpec::new("npm", ["run", "deploy"]);
        assert_eq!(cmd.to_string(), "npm run deploy");
    }
}
