//! Fleet-wide check runner
//!
//! Runs named shell-command checks from a YAML configuration against each
//! host in a target list, sequentially, and reports an aggregate pass/fail
//! verdict. Each invocation gets a fresh copy of the process environment
//! with `TARGET` set to the current host.

pub mod common;
pub mod config;
pub mod runner;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use config::{Check, Config};
pub use runner::{CommandOutput, CommandRunner, EnvSnapshot, Harness, ShellRunner};
