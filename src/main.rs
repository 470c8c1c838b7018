//! Fleet check runner CLI
//!
//! Thin entry point: parse arguments, load the configuration and target
//! list, hand both to the engine, and map its verdict to the process exit
//! code (0 = all checks passed, 1 = any failure).

use std::path::PathBuf;

use clap::Parser;

use fleetcheck::common::{logging, Result};
use fleetcheck::{config, runner};

#[derive(Parser)]
#[command(name = "fleetcheck", about = "Run shell-command checks against a list of target hosts")]
#[command(version, long_about = None)]
struct Cli {
    /// Path to a newline-delimited file of target hosts
    target_file_path: PathBuf,

    /// Path to the YAML check configuration
    config_file_path: PathBuf,

    /// Also echo captured stderr for failing checks
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = config::load_config(&cli.config_file_path)?;
    let targets = config::load_targets(&cli.target_file_path)?;
    Ok(runner::run_checks(&config, &targets, cli.verbose))
}
