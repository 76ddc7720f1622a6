//! CLI command execution helpers with automatic timing
//!
//! This module provides a wrapper around the `handy` CLI binary that
//! measures execution time and provides convenient assertion methods.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// CLI command builder with timing
pub struct HandyCommand {
    binary_path: PathBuf,
    args: Vec<String>,
    env: HashMap<String, String>,
    stdin_data: Option<String>,
}

impl HandyCommand {
    /// Create a new command
    ///
    /// The config file points into a fresh temp directory so the user's own
    /// configuration never leaks into a test.
    pub fn new(config_dir: &tempfile::TempDir) -> Self {
        let mut env = HashMap::new();
        env.insert(
            "HANDY_CONFIG".to_string(),
            config_dir.path().join("config.toml").display().to_string(),
        );
        env.insert("HANDY_LOG".to_string(), "warn".to_string());

        Self {
            binary_path: PathBuf::from(env!("CARGO_BIN_EXE_handy")),
            args: Vec::new(),
            env,
            stdin_data: None,
        }
    }

    /// Add command arguments
    pub fn args(&mut self, args: &[&str]) -> &mut Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Provide stdin data
    pub fn stdin(&mut self, data: &str) -> &mut Self {
        self.stdin_data = Some(data.to_string());
        self
    }

    /// Execute command and return result with timing
    pub fn execute(&self) -> Result<CommandResult> {
        let start = Instant::now();

        let mut command = Command::new(&self.binary_path);
        command
            .args(&self.args)
            .envs(&self.env)
            .stdin(if self.stdin_data.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().context("Failed to spawn handy")?;

        if let Some(data) = &self.stdin_data {
            // Dropping stdin closes the pipe, which ends the input
            let mut stdin = child.stdin.take().context("stdin not piped")?;
            stdin.write_all(data.as_bytes())?;
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for handy")?;

        Ok(CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code().unwrap_or(-1),
            duration: start.elapsed(),
        })
    }

    /// Execute and assert success
    pub fn assert_success(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if !result.success() {
            anyhow::bail!(
                "Command failed (exit code: {}):\nArgs: {:?}\nStdout: {}\nStderr: {}",
                result.exit_code,
                self.args,
                result.stdout,
                result.stderr
            );
        }

        Ok(result)
    }

    /// Execute and expect failure
    pub fn assert_failure(&self) -> Result<CommandResult> {
        let result = self.execute()?;

        if result.success() {
            anyhow::bail!(
                "Command should have failed but succeeded:\nArgs: {:?}\nStdout: {}",
                self.args,
                result.stdout
            );
        }

        Ok(result)
    }
}

/// Command execution result with timing
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CommandResult {
    /// Check if command succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Stdout without the trailing newline
    pub fn output(&self) -> &str {
        self.stdout.trim_end()
    }

    /// Stdout split into lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Check if stderr contains text
    pub fn contains_stderr(&self, text: &str) -> bool {
        self.stderr.contains(text)
    }
}

/// Macro for convenient command construction
///
/// Usage:
/// ```ignore
/// handy!(dir, "calc", "add", "0.1", "0.2").assert_success()?;
/// ```
#[macro_export]
macro_rules! handy {
    ($dir:expr, $($arg:expr),*) => {{
        let mut cmd = $crate::common::cli::HandyCommand::new($dir);
        cmd.args(&[$($arg),*]);
        cmd
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_trims_newline() {
        let result = CommandResult {
            stdout: "0.3\n".to_string(),
            stderr: String::new(),
            exit_code: 0,
            duration: Duration::from_millis(10),
        };
        assert_eq!(result.output(), "0.3");
        assert_eq!(result.lines(), vec!["0.3"]);
    }
}
