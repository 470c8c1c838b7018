//! Check execution engine
//!
//! Runs the configured checks against every target in order and folds the
//! results into a single pass/fail verdict. Execution is strictly
//! sequential: one invocation at a time, targets in file order, checks in
//! declaration order within each target. There are no timeouts and no
//! retries; a hung command hangs the run.

mod environment;
mod exec;

pub use environment::{EnvSnapshot, TARGET_VAR};
pub use exec::{CommandOutput, CommandRunner, ShellRunner};

use std::io::Write;

use colored::Colorize;

use crate::config::Config;

/// Drives the check matrix and writes the human-readable transcript
///
/// The transcript sink and the command runner are both injected, so tests
/// can capture output and script outcomes without spawning processes.
pub struct Harness<R, W> {
    runner: R,
    transcript: W,
    base_env: EnvSnapshot,
    verbose: bool,
}

impl<R: CommandRunner, W: Write> Harness<R, W> {
    pub fn new(runner: R, transcript: W, base_env: EnvSnapshot) -> Self {
        Self {
            runner,
            transcript,
            base_env,
            verbose: false,
        }
    }

    /// Also echo captured stderr to the transcript for failing checks
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run every check against every target
    ///
    /// Returns `true` iff every invocation exited with status 0. A nonzero
    /// exit is recorded and the run continues; a spawn failure aborts the
    /// rest of the run immediately with a `false` verdict.
    pub fn run_all(&mut self, config: &Config, targets: &[String]) -> bool {
        let mut passed = true;

        self.line(&format!("Config file: {}", config.config_name.bold()));

        for target in targets {
            self.line(&format!(
                "\nRunning checks for target: {}",
                target.bold()
            ));

            for check in &config.tests {
                self.text(&format!(
                    "Running check {} for target {}: ",
                    check.test_name, target
                ));

                let env = self.base_env.with_target(target);
                match self.runner.run(&check.exec_string, &env) {
                    Ok(output) => {
                        if output.passed() {
                            self.line(&format!("{}", "✓".green()));
                        } else {
                            self.line(&format!(
                                "{} (exit status {})",
                                "✗".red(),
                                output.status
                            ));
                            passed = false;
                        }
                        self.emit_output(&output);
                        tracing::info!(
                            "Check {} for target {} finished with status {}",
                            check.test_name,
                            target,
                            output.status
                        );
                    }
                    Err(e) => {
                        self.line(&format!("{} spawn failure: {}", "✗".red(), e));
                        tracing::info!(
                            "Check {} for target {} could not be spawned: {}; aborting run",
                            check.test_name,
                            target,
                            e
                        );
                        return false;
                    }
                }
            }
        }

        passed
    }

    /// Echo the captured output of one invocation to the transcript
    ///
    /// Stdout bytes are always echoed verbatim and mirrored line by line to
    /// the diagnostic log. Stderr is echoed only in verbose mode and only
    /// for failing checks.
    fn emit_output(&mut self, output: &CommandOutput) {
        let _ = self.transcript.write_all(&output.stdout);
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            tracing::info!("Check output: {}", line);
        }
        if self.verbose && !output.passed() {
            let _ = self.transcript.write_all(&output.stderr);
        }
    }

    fn line(&mut self, text: &str) {
        // A broken transcript pipe must not change the verdict.
        let _ = writeln!(self.transcript, "{}", text);
    }

    fn text(&mut self, text: &str) {
        let _ = write!(self.transcript, "{}", text);
    }
}

/// Run the checks with the production shell runner, transcript to stdout
pub fn run_checks(config: &Config, targets: &[String], verbose: bool) -> bool {
    let stdout = std::io::stdout();
    Harness::new(ShellRunner, stdout.lock(), EnvSnapshot::capture())
        .verbose(verbose)
        .run_all(config, targets)
}
