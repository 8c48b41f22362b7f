//! External command execution.
//! Commands run synchronously with inherited standard streams, the same way the
//! scaffold and package-manager tools expect to talk to the operator.

use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// A program and its arguments, passed to the OS without a shell in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') || arg.contains('*') {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Runs external commands on behalf of the generator.
pub trait ShellRunner {
    /// Runs `command` in `working_dir` and waits for it to finish.
    ///
    /// # Errors
    /// * `Error::CommandError` if the process cannot be started or exits unsuccessfully
    fn run(&self, command: &ShellCommand, working_dir: &Path) -> Result<()>;
}

/// [`ShellRunner`] backed by `std::process::Command`.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Node tooling ships as `.cmd` shims on Windows.
fn resolve_program(program: &str) -> String {
    if cfg!(windows) && matches!(program, "npm" | "npx" | "yarn" | "pnpm") {
        format!("{program}.cmd")
    } else {
        program.to_string()
    }
}

impl ShellRunner for ProcessRunner {
    fn run(&self, command: &ShellCommand, working_dir: &Path) -> Result<()> {
        debug!("Running '{}' in '{}'.", command, working_dir.display());

        let status = Command::new(resolve_program(&command.program))
            .args(&command.args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Error::CommandError {
                command: command.to_string(),
                reason: format!("could not be started: {e}"),
            })?;

        if !status.success() {
            return Err(Error::CommandError {
                command: command.to_string(),
                reason: format!("failed with {status}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_quotes_special_arguments() {
        let command = ShellCommand::new("npx").args(["create-next-app@latest", ".", "@/*"]);
        assert_eq!(command.to_string(), "npx create-next-app@latest . \"@/*\"");
    }

    #[test]
    fn test_missing_program_is_a_command_error() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let command = ShellCommand::new("rnt-surely-missing-program");
        let err = ProcessRunner::new().run(&command, temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::CommandError { .. }));
    }
}
