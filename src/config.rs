//! Check configuration and target list loading
//!
//! Parses the YAML check configuration into strongly-typed records and the
//! target file into an ordered list of trimmed host strings. The engine only
//! ever sees these validated types, never the raw document.
//!
//! Config schema:
//! ```yaml
//! configName: smoke
//! tests:
//!   - testName: ping
//!     execString: ping -c 1 "$TARGET"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};

/// A complete check configuration loaded from a YAML file
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Display name for this configuration
    #[serde(rename = "configName")]
    pub config_name: String,

    /// Checks to run, in declaration order, against every target
    #[serde(default)]
    pub tests: Vec<Check>,
}

/// A single named shell-command check
///
/// The command line is opaque to the runner and handed to a shell verbatim,
/// so operators can write arbitrary pipelines and redirections. Missing
/// fields are a parse error rather than a runtime surprise.
#[derive(Debug, Clone, Deserialize)]
pub struct Check {
    /// Display name, not required to be unique
    #[serde(rename = "testName")]
    pub test_name: String,

    /// Shell command line executed once per target
    #[serde(rename = "execString")]
    pub exec_string: String,
}

/// Parse a check configuration from YAML text
pub fn parse_config(content: &str) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
}

/// Load a check configuration from a YAML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
    parse_config(&content)
}

/// Parse a target list from newline-delimited text
///
/// Each line is trimmed and kept verbatim. Blank lines still count as
/// targets: the runner attempts them with `TARGET` set to the empty string.
pub fn parse_targets(content: &str) -> Vec<String> {
    content.lines().map(|line| line.trim().to_string()).collect()
}

/// Load the target list from a file
pub fn load_targets(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
    Ok(parse_targets(&content))
}
