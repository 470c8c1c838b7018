//! Command invocation
//!
//! The engine depends on the `CommandRunner` capability rather than spawning
//! processes directly, so tests can substitute a fake runner and drive every
//! failure mode deterministically.

use std::collections::HashMap;
use std::io;
use std::process::{Command, Stdio};

/// Captured result of one completed invocation
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Captured standard output bytes
    pub stdout: Vec<u8>,
    /// Captured standard error bytes
    pub stderr: Vec<u8>,
    /// Exit status; -1 when the child was killed by a signal
    pub status: i32,
}

impl CommandOutput {
    /// Whether the invocation counts as passed
    pub fn passed(&self) -> bool {
        self.status == 0
    }
}

/// Capability to run one shell command line with a given environment
///
/// `run` blocks until the child exits and both output streams are fully
/// drained. An `Err` means the process could not be spawned at all, which
/// the engine treats as fatal; a command that runs and exits nonzero is an
/// `Ok` with a nonzero status.
pub trait CommandRunner {
    fn run(&mut self, command: &str, env: &HashMap<String, String>) -> io::Result<CommandOutput>;
}

/// Production runner: hands the command line to `sh -c` verbatim
///
/// The command text is fully trusted operator content; target names only
/// reach it through the `TARGET` environment variable, never by string
/// interpolation into the command line.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &str, env: &HashMap<String, String>) -> io::Result<CommandOutput> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .env_clear()
            .envs(env)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            // code() is None when the child died to a signal
            status: output.status.code().unwrap_or(-1),
        })
    }
}
