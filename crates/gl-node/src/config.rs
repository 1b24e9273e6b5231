//! Host configuration from environment variables.

use gl_chaincode::ChaincodeConfig;
use std::env;
use std::path::PathBuf;

/// Configuration for the host runtime.
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// World state snapshot, loaded on start and saved after the run.
    /// `None` keeps state in memory only.
    pub state_file: Option<PathBuf>,

    /// Log filter directive (trace, debug, info, warn, error)
    pub log_level: String,

    /// Chaincode tables and defaults
    pub chaincode: ChaincodeConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            log_level: "info".to_string(),
            chaincode: ChaincodeConfig::default(),
        }
    }
}

impl HostConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GL_STATE_FILE`: Snapshot path (default: none)
    /// - `GL_LOG`: Log filter (default: info)
    /// - `GL_TABLE_PREFIX`: Prefix applied to every table name (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut chaincode = ChaincodeConfig::default();
        if let Some(prefix) = non_empty("GL_TABLE_PREFIX") {
            chaincode = chaincode.with_table_prefix(&prefix);
        }

        Self {
            state_file: non_empty("GL_STATE_FILE").map(PathBuf::from),
            log_level: non_empty("GL_LOG").unwrap_or_else(|| "info".to_string()),
            chaincode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = HostConfig::from_lookup(lookup(&[]));
        assert_eq!(config.state_file, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.chaincode, ChaincodeConfig::default());
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = HostConfig::from_lookup(lookup(&[
            ("GL_STATE_FILE", "/var/lib/gl/state.json"),
            ("GL_LOG", "gl_chaincode=debug"),
            ("GL_TABLE_PREFIX", "dev_"),
        ]));
        assert_eq!(config.state_file, Some(PathBuf::from("/var/lib/gl/state.json")));
        assert_eq!(config.log_level, "gl_chaincode=debug");
        assert_eq!(config.chaincode.request_table, "dev_RequestTable");
    }

    #[test]
    fn test_blank_variables_are_ignored() {
        let config = HostConfig::from_lookup(lookup(&[("GL_STATE_FILE", " "), ("GL_LOG", "")]));
        assert_eq!(config.state_file, None);
        assert_eq!(config.log_level, "info");
    }
}
