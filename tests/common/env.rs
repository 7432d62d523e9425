//! Test environment builder for isolated practice-log testing.
//!
//! Provides `TestEnv` - a temp working directory with its own HOME, plus
//! helpers to lay out dated problem folders and run the CLI.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running a practice-log CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Working directory the CLI runs in
    pub workdir: TempDir,
    /// Temporary directory used as HOME / XDG config home
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            workdir: TempDir::new().expect("Failed to create work temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.workdir.path().join(relative)
    }

    /// Create a problem folder with empty solution files
    pub fn with_folder(self, folder: &str, files: &[&str]) -> Self {
        let dir = self.path(folder);
        std::fs::create_dir_all(&dir).expect("Failed to create folder");
        for file in files {
            std::fs::write(dir.join(file), "# solution\n").expect("Failed to write file");
        }
        self
    }

    /// Write a file relative to the working directory
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Read a file relative to the working directory
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Parse the generated data file
    pub fn read_data(&self, relative: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(relative)).expect("data file is valid JSON")
    }

    /// Run practice-log in the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run practice-log with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let output = self
            .command(args, env_vars)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute practice-log");
        to_result(output)
    }

    /// Run practice-log with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args, &[])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn practice-log");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        let output = child.wait_with_output().expect("Failed to wait for practice-log");
        to_result(output)
    }

    fn command(&self, args: &[&str], env_vars: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.workdir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            // Keep git from discovering a repository above the temp dir
            .env("GIT_CEILING_DIRECTORIES", ceiling(self.workdir.path()))
            .env_remove("PRACTICE_LOG_ROOT")
            .env_remove("PRACTICE_LOG_OUTPUT_DIR")
            .env_remove("PRACTICE_LOG_EXTENSION")
            .env_remove("PRACTICE_LOG_REMOTE")
            .env_remove("PRACTICE_LOG_BRANCH");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to the practice-log binary under test
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_practice-log")
}

fn ceiling(dir: &Path) -> PathBuf {
    dir.parent().unwrap_or(dir).to_path_buf()
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
