//! Per-invocation environment construction
//!
//! The base process environment is captured exactly once at startup and
//! never mutated. Every invocation gets its own copy with `TARGET` set, so
//! nothing injected for one check can leak into the next.

use std::collections::HashMap;

/// Environment variable carrying the current target to the check command
pub const TARGET_VAR: &str = "TARGET";

/// Immutable snapshot of the base process environment
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Build a snapshot from explicit key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Fresh environment map for one invocation: the base with `TARGET`
    /// set to (or overriding any pre-existing value with) the given target
    pub fn with_target(&self, target: &str) -> HashMap<String, String> {
        let mut env = self.vars.clone();
        env.insert(TARGET_VAR.to_string(), target.to_string());
        env
    }
}
